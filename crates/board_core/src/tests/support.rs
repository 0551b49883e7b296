use std::sync::Arc;

use shared::domain::{Coordinates, EmployerId, EmployerRecord, Region};

use crate::{dataset::Dataset, store::BoardStore};

pub fn employer(id: &str, region: Region, industry: &str) -> EmployerRecord {
    EmployerRecord {
        id: EmployerId::new(id),
        name: format!("{id} pty ltd"),
        industry: industry.to_string(),
        contact_first_name: "Sam".to_string(),
        contact_last_name: "Lee".to_string(),
        email: format!("{id}@jobs.example"),
        phone: "+61 2 5550 0100".to_string(),
        address: format!("1 {id} St"),
        coordinates: Coordinates::new(-33.87, 151.21),
        region,
    }
}

pub fn employer_at(id: &str, region: Region, industry: &str, lat: f64, lon: f64) -> EmployerRecord {
    EmployerRecord {
        coordinates: Coordinates::new(lat, lon),
        ..employer(id, region, industry)
    }
}

pub fn store_with(records: Vec<EmployerRecord>) -> BoardStore {
    BoardStore::new(Arc::new(Dataset::from_records(records).expect("dataset")))
}

pub fn id(value: &str) -> EmployerId {
    EmployerId::new(value)
}
