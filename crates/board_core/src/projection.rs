//! Read-only projections the list and map views render from.

use shared::domain::{Coordinates, EmployerId, EmployerRecord};

use crate::{
    contact::{CallIntent, MailIntent},
    industry::{style_for, IndustryStyle},
};

/// Visual emphasis of a list card; selection wins over contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEmphasis {
    Selected,
    Contacted,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDot {
    Contacted,
    SelectedPulse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListCard<'a> {
    pub record: &'a EmployerRecord,
    pub contacted: bool,
    pub selected: bool,
    pub style: IndustryStyle,
}

impl<'a> ListCard<'a> {
    pub fn new(record: &'a EmployerRecord, contacted: bool, selected: bool) -> Self {
        Self {
            record,
            contacted,
            selected,
            style: style_for(&record.industry),
        }
    }

    pub fn emphasis(&self) -> CardEmphasis {
        if self.selected {
            CardEmphasis::Selected
        } else if self.contacted {
            CardEmphasis::Contacted
        } else {
            CardEmphasis::Default
        }
    }

    pub fn status_dot(&self) -> Option<StatusDot> {
        match (self.contacted, self.selected) {
            (true, _) => Some(StatusDot::Contacted),
            (false, true) => Some(StatusDot::SelectedPulse),
            (false, false) => None,
        }
    }

    pub fn contact_button_label(&self) -> &'static str {
        if self.contacted {
            "Contacted"
        } else {
            "Contact"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerGlyph {
    pub style: IndustryStyle,
    pub initial: char,
    pub selected: bool,
}

impl MarkerGlyph {
    pub fn size(&self) -> f32 {
        if self.selected {
            48.0
        } else {
            40.0
        }
    }

    pub fn stroke_width(&self) -> f32 {
        if self.selected {
            4.0
        } else {
            3.0
        }
    }

    pub fn font_size(&self) -> f32 {
        if self.selected {
            14.0
        } else {
            12.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent<'a> {
    pub title: &'a str,
    pub industry: &'a str,
    pub contact_name: String,
    pub address: &'a str,
    pub mail: MailIntent,
    pub call: CallIntent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker<'a> {
    pub record: &'a EmployerRecord,
    pub glyph: MarkerGlyph,
}

impl<'a> MapMarker<'a> {
    pub fn new(record: &'a EmployerRecord, selected: bool) -> Self {
        Self {
            record,
            glyph: MarkerGlyph {
                style: style_for(&record.industry),
                initial: record.initial(),
                selected,
            },
        }
    }

    pub fn id(&self) -> &'a EmployerId {
        &self.record.id
    }

    pub fn position(&self) -> Coordinates {
        self.record.coordinates
    }

    pub fn popup(&self) -> PopupContent<'a> {
        PopupContent {
            title: &self.record.name,
            industry: &self.record.industry,
            contact_name: self.record.contact_name(),
            address: &self.record.address,
            mail: MailIntent::plain(self.record),
            call: CallIntent::from_record(self.record),
        }
    }
}

pub fn employer_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} employer{plural} ready to hire • Contact directly")
}

/// Legend entries for the visible industries in first-seen order, or `None`
/// when there is nothing to show or too many industries to fit.
pub fn legend_entries(records: &[&EmployerRecord]) -> Option<Vec<(String, IndustryStyle)>> {
    const MAX_LEGEND_ENTRIES: usize = 6;

    let mut entries: Vec<(String, IndustryStyle)> = Vec::new();
    for record in records {
        if !entries.iter().any(|(industry, _)| *industry == record.industry) {
            entries.push((record.industry.clone(), style_for(&record.industry)));
        }
    }
    (!entries.is_empty() && entries.len() <= MAX_LEGEND_ENTRIES).then_some(entries)
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
