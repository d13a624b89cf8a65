use serde::{Deserialize, Serialize};

/// One field of a company record
///
/// The serialized names are the column names of the harvested dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Url,
    Name,
    RegistrationCode,
    Address,
    Phone,
    Email,
    Website,
    ActivityArea,
    EmployeeCount,
    FoundingDate,
    Category,
}

impl Field {
    /// All fields in output column order
    pub const ALL: [Field; 11] = [
        Field::Url,
        Field::Name,
        Field::RegistrationCode,
        Field::Address,
        Field::Phone,
        Field::Email,
        Field::Website,
        Field::ActivityArea,
        Field::EmployeeCount,
        Field::FoundingDate,
        Field::Category,
    ];

    /// Returns the column name used in CSV and JSON output
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Name => "pavadinimas",
            Field::RegistrationCode => "imones_kodas",
            Field::Address => "adresas",
            Field::Phone => "telefonas",
            Field::Email => "el_pastas",
            Field::Website => "svetaine",
            Field::ActivityArea => "veiklos_sritis",
            Field::EmployeeCount => "darbuotoju_skaicius",
            Field::FoundingDate => "steigimo_data",
            Field::Category => "kategorija",
        }
    }
}

/// One discovered company
///
/// `url` is always present and identifies the record within a run. Every
/// other field is either a non-empty string or absent. Activity area,
/// employee count and founding date are reserved: no extraction rule fills
/// them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub url: String,
    #[serde(rename = "pavadinimas")]
    pub name: Option<String>,
    #[serde(rename = "imones_kodas")]
    pub registration_code: Option<String>,
    #[serde(rename = "adresas")]
    pub address: Option<String>,
    #[serde(rename = "telefonas")]
    pub phone: Option<String>,
    #[serde(rename = "el_pastas")]
    pub email: Option<String>,
    #[serde(rename = "svetaine")]
    pub website: Option<String>,
    #[serde(rename = "veiklos_sritis")]
    pub activity_area: Option<String>,
    #[serde(rename = "darbuotoju_skaicius")]
    pub employee_count: Option<String>,
    #[serde(rename = "steigimo_data")]
    pub founding_date: Option<String>,
    #[serde(rename = "kategorija")]
    pub category: Option<String>,
}

impl CompanyRecord {
    /// Creates a record with only the source URL set
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            registration_code: None,
            address: None,
            phone: None,
            email: None,
            website: None,
            activity_area: None,
            employee_count: None,
            founding_date: None,
            category: None,
        }
    }

    /// Returns the value of a field, if present
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Url => Some(self.url.as_str()),
            Field::Name => self.name.as_deref(),
            Field::RegistrationCode => self.registration_code.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Website => self.website.as_deref(),
            Field::ActivityArea => self.activity_area.as_deref(),
            Field::EmployeeCount => self.employee_count.as_deref(),
            Field::FoundingDate => self.founding_date.as_deref(),
            Field::Category => self.category.as_deref(),
        }
    }

    /// Sets a field value
    ///
    /// Values that are empty after trimming are ignored so that an absent
    /// field is never replaced by a placeholder. The URL is only replaced by
    /// a non-empty value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let value = value.to_string();

        match field {
            Field::Url => self.url = value,
            Field::Name => self.name = Some(value),
            Field::RegistrationCode => self.registration_code = Some(value),
            Field::Address => self.address = Some(value),
            Field::Phone => self.phone = Some(value),
            Field::Email => self.email = Some(value),
            Field::Website => self.website = Some(value),
            Field::ActivityArea => self.activity_area = Some(value),
            Field::EmployeeCount => self.employee_count = Some(value),
            Field::FoundingDate => self.founding_date = Some(value),
            Field::Category => self.category = Some(value),
        }
    }

    /// Returns the record as (column name, value) pairs in column order
    pub fn to_row(&self) -> Vec<(&'static str, Option<&str>)> {
        Field::ALL
            .iter()
            .map(|field| (field.column_name(), self.get(*field)))
            .collect()
    }
}
