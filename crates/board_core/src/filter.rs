use serde::{Deserialize, Serialize};
use shared::domain::{EmployerRecord, Region};

use crate::dataset::{ALL_INDUSTRIES, ALL_REGIONS};

/// Region/industry constraints chosen in the filter panel. `None` means the
/// axis is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawFilterSelection")]
pub struct FilterSelection {
    pub region: Option<String>,
    pub industry: Option<String>,
}

#[derive(Deserialize)]
struct RawFilterSelection {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}

impl From<RawFilterSelection> for FilterSelection {
    fn from(raw: RawFilterSelection) -> Self {
        Self::new(raw.region.as_deref(), raw.industry.as_deref())
    }
}

fn constraint<'a>(value: Option<&'a str>, sentinel: &str) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != sentinel)
}

fn normalize(value: Option<&str>, sentinel: &str) -> Option<String> {
    constraint(value, sentinel).map(str::to_string)
}

impl FilterSelection {
    pub fn new(region: Option<&str>, industry: Option<&str>) -> Self {
        Self {
            region: normalize(region, ALL_REGIONS),
            industry: normalize(industry, ALL_INDUSTRIES),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }

    /// Builds the selection from the raw values of the two choice controls.
    pub fn from_choices(region_choice: &str, industry_choice: &str) -> Self {
        Self::new(Some(region_choice), Some(industry_choice))
    }

    pub fn with_region(self, region: Region) -> Self {
        Self {
            region: Some(region.code().to_string()),
            ..self
        }
    }

    pub fn with_industry(self, industry: &str) -> Self {
        Self {
            industry: normalize(Some(industry), ALL_INDUSTRIES),
            ..self
        }
    }

    pub fn region_choice(&self) -> &str {
        self.region_constraint().unwrap_or(ALL_REGIONS)
    }

    pub fn industry_choice(&self) -> &str {
        self.industry_constraint().unwrap_or(ALL_INDUSTRIES)
    }

    pub fn is_empty(&self) -> bool {
        self.region_constraint().is_none() && self.industry_constraint().is_none()
    }

    // Blank and sentinel values read as unconstrained.
    fn region_constraint(&self) -> Option<&str> {
        constraint(self.region.as_deref(), ALL_REGIONS)
    }

    fn industry_constraint(&self) -> Option<&str> {
        constraint(self.industry.as_deref(), ALL_INDUSTRIES)
    }

    pub fn matches(&self, record: &EmployerRecord) -> bool {
        let region_match = self
            .region_constraint()
            .map_or(true, |code| code == record.region.code());
        let industry_match = self
            .industry_constraint()
            .map_or(true, |industry| industry == record.industry);
        region_match && industry_match
    }
}

/// Records matching `selection`, in dataset order.
pub fn apply_filter<'a>(
    records: &'a [EmployerRecord],
    selection: &FilterSelection,
) -> Vec<&'a EmployerRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
