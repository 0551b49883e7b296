use shared::domain::Region;

use super::*;
use crate::{industry::IndustryKind, test_support::employer};

#[test]
fn selected_marker_glyph_is_larger() {
    let record = employer("c1", Region::Vic, "Agriculture");
    let idle = MapMarker::new(&record, false);
    let focused = MapMarker::new(&record, true);
    assert_eq!(idle.glyph.size(), 40.0);
    assert_eq!(focused.glyph.size(), 48.0);
    assert_eq!(focused.glyph.stroke_width(), 4.0);
    assert_eq!(focused.glyph.initial, 'C');
    assert_eq!(focused.glyph.style.kind, IndustryKind::Agriculture);
}

#[test]
fn popup_carries_contact_details() {
    let record = employer("c1", Region::Vic, "Mining");
    let popup = MapMarker::new(&record, true).popup();
    assert_eq!(popup.title, "c1 pty ltd");
    assert_eq!(popup.contact_name, "Sam Lee");
    assert_eq!(popup.mail.to_uri(), "mailto:c1@jobs.example");
    assert_eq!(popup.call.to_uri(), "tel:+61255500100");
}

#[test]
fn unknown_industry_falls_back_to_default_style() {
    let record = employer("c1", Region::Vic, "Fishing");
    let card = ListCard::new(&record, false, false);
    assert_eq!(card.style.kind, IndustryKind::Other);
    assert_eq!(card.contact_button_label(), "Contact");
}

#[test]
fn count_label_pluralises() {
    assert_eq!(employer_count_label(1), "1 employer ready to hire • Contact directly");
    assert_eq!(employer_count_label(0), "0 employers ready to hire • Contact directly");
}

#[test]
fn legend_lists_first_seen_industries_up_to_six() {
    let records = [
        employer("a", Region::Vic, "Mining"),
        employer("b", Region::Vic, "Agriculture"),
        employer("c", Region::Vic, "Mining"),
    ];
    let refs: Vec<&EmployerRecord> = records.iter().collect();
    let legend = legend_entries(&refs).expect("legend");
    assert_eq!(
        legend.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        vec!["Mining", "Agriculture"]
    );

    assert!(legend_entries(&[]).is_none());

    let many: Vec<EmployerRecord> = (0..7)
        .map(|i| employer(&format!("e{i}"), Region::Vic, &format!("Industry {i}")))
        .collect();
    let refs: Vec<&EmployerRecord> = many.iter().collect();
    assert!(legend_entries(&refs).is_none());
}
