use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(EmployerId);

/// Australian state or territory an employer is located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Nt,
    Act,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::Nsw,
        Region::Vic,
        Region::Qld,
        Region::Wa,
        Region::Sa,
        Region::Tas,
        Region::Nt,
        Region::Act,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Nsw => "NSW",
            Region::Vic => "VIC",
            Region::Qld => "QLD",
            Region::Wa => "WA",
            Region::Sa => "SA",
            Region::Tas => "TAS",
            Region::Nt => "NT",
            Region::Act => "ACT",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Nsw => "New South Wales",
            Region::Vic => "Victoria",
            Region::Qld => "Queensland",
            Region::Wa => "Western Australia",
            Region::Sa => "South Australia",
            Region::Tas => "Tasmania",
            Region::Nt => "Northern Territory",
            Region::Act => "Australian Capital Territory",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One hiring company's contact and location data, as stored in the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRecord {
    #[serde(rename = "companyId")]
    pub id: EmployerId,
    #[serde(rename = "companyName")]
    pub name: String,
    pub industry: String,
    #[serde(rename = "firstName")]
    pub contact_first_name: String,
    #[serde(rename = "lastName")]
    pub contact_last_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone: String,
    pub address: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(rename = "state")]
    pub region: Region,
}

impl EmployerRecord {
    pub fn contact_name(&self) -> String {
        format!("{} {}", self.contact_first_name, self.contact_last_name)
            .trim()
            .to_string()
    }

    /// First character of the company name, upper-cased; used on avatars and markers.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|ch| ch.to_uppercase().next())
            .unwrap_or('?')
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.id.as_str().trim().is_empty() {
            return Err(RecordError::BlankId {
                name: self.name.clone(),
            });
        }
        if !self.coordinates.is_valid() {
            return Err(RecordError::InvalidCoordinates {
                id: self.id.clone(),
                latitude: self.coordinates.latitude,
                longitude: self.coordinates.longitude,
            });
        }
        Ok(())
    }
}
