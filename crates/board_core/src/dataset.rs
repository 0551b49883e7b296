//! Immutable employer dataset and the option lists derived from it.

use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::Path,
};

use shared::domain::{EmployerId, EmployerRecord, Region};
use tracing::info;

use crate::error::DatasetError;

/// Filter choice value meaning "no region constraint".
pub const ALL_REGIONS: &str = "all-states";
/// Filter choice value meaning "no industry constraint".
pub const ALL_INDUSTRIES: &str = "all-industries";

const BUNDLED_DATASET: &str = include_str!("../../../data/companies.json");

/// One entry of a filter choice control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == ALL_REGIONS || self.value == ALL_INDUSTRIES
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EmployerRecord>,
    index: HashMap<EmployerId, usize>,
    industries: Vec<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<EmployerRecord>) -> Result<Self, DatasetError> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| DatasetError::InvalidRecord {
                    index: position,
                    source,
                })?;
            if index.insert(record.id.clone(), position).is_some() {
                return Err(DatasetError::DuplicateId(record.id.clone()));
            }
        }
        let industries = unique_industries(&records);
        Ok(Self {
            records,
            index,
            industries,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<EmployerRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            employers = dataset.len(),
            industries = dataset.industries.len(),
            "loaded employer dataset"
        );
        Ok(dataset)
    }

    /// The sample dataset compiled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    pub fn records(&self) -> &[EmployerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &EmployerId) -> Option<&EmployerRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &EmployerId) -> bool {
        self.index.contains_key(id)
    }

    /// Distinct industries, sorted.
    pub fn industries(&self) -> &[String] {
        &self.industries
    }

    pub fn industry_options(&self) -> Vec<ChoiceOption> {
        std::iter::once(ChoiceOption::new(ALL_INDUSTRIES, "All Industries"))
            .chain(
                self.industries
                    .iter()
                    .map(|industry| ChoiceOption::new(industry.clone(), industry.clone())),
            )
            .collect()
    }

    pub fn region_options() -> Vec<ChoiceOption> {
        std::iter::once(ChoiceOption::new(ALL_REGIONS, "All States"))
            .chain(
                Region::ALL
                    .into_iter()
                    .map(|region| ChoiceOption::new(region.code(), region.name())),
            )
            .collect()
    }
}

pub fn unique_industries(records: &[EmployerRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.industry.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Industry choice values with the "all industries" sentinel first.
pub fn industry_choices(records: &[EmployerRecord]) -> Vec<String> {
    std::iter::once(ALL_INDUSTRIES.to_string())
        .chain(unique_industries(records))
        .collect()
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
