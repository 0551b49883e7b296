use crate::{
    domain::{Coordinates, EmployerId, EmployerRecord, Region},
    error::RecordError,
};

fn sample_json() -> &'static str {
    r#"{
        "companyId": "c1",
        "companyName": "harvest co",
        "industry": "Agriculture",
        "firstName": "Jo",
        "lastName": "Bloggs",
        "email": "jo@harvest.example",
        "phoneNumber": "+61 3 9000 0000",
        "address": "1 Farm Rd, Mildura VIC 3500",
        "latitude": -34.2,
        "longitude": 142.16,
        "state": "VIC"
    }"#
}

#[test]
fn deserializes_dataset_keys_into_record_fields() {
    let record: EmployerRecord = serde_json::from_str(sample_json()).expect("record");
    assert_eq!(record.id, EmployerId::new("c1"));
    assert_eq!(record.region, Region::Vic);
    assert_eq!(record.phone, "+61 3 9000 0000");
    assert_eq!(record.coordinates, Coordinates::new(-34.2, 142.16));
    assert_eq!(record.contact_name(), "Jo Bloggs");
    assert_eq!(record.initial(), 'H');
}

#[test]
fn rejects_unknown_region_code() {
    let raw = sample_json().replace("\"VIC\"", "\"XYZ\"");
    assert!(serde_json::from_str::<EmployerRecord>(&raw).is_err());
}

#[test]
fn region_codes_round_trip_through_lookup() {
    for region in Region::ALL {
        assert_eq!(Region::from_code(region.code()), Some(region));
    }
    assert_eq!(Region::from_code(" vic "), Some(Region::Vic));
    assert_eq!(Region::from_code("all-states"), None);
}

#[test]
fn validation_flags_out_of_range_coordinates() {
    let mut record: EmployerRecord = serde_json::from_str(sample_json()).expect("record");
    record.coordinates = Coordinates::new(-134.0, 142.0);
    assert!(matches!(
        record.validate(),
        Err(RecordError::InvalidCoordinates { .. })
    ));

    record.coordinates = Coordinates::new(f64::NAN, 142.0);
    assert!(record.validate().is_err());
}

#[test]
fn validation_flags_blank_id() {
    let mut record: EmployerRecord = serde_json::from_str(sample_json()).expect("record");
    record.id = EmployerId::new("  ");
    assert_eq!(
        record.validate(),
        Err(RecordError::BlankId {
            name: "harvest co".to_string()
        })
    );
}

#[test]
fn initial_uppercases_non_ascii_letters() {
    let mut record: EmployerRecord = serde_json::from_str(sample_json()).expect("record");
    record.name = "élan winery".to_string();
    assert_eq!(record.initial(), 'É');
    record.name = String::new();
    assert_eq!(record.initial(), '?');
}
