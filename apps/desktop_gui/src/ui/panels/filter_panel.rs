use board_core::{ChoiceOption, FilterSelection};
use eframe::egui;

use crate::{controller::events::UiEvent, ui::theme};

fn choice_combo(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    options: &[ChoiceOption],
    current: &mut String,
) -> bool {
    let selected_text = options
        .iter()
        .find(|option| option.value == *current)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| current.clone());

    let mut changed = false;
    ui.label(egui::RichText::new(label).color(theme::MUTED_TEXT));
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            for option in options {
                changed |= ui
                    .selectable_value(current, option.value.clone(), option.label.as_str())
                    .changed();
            }
        });
    changed
}

/// Region and industry selectors; emits a new filter when either changes.
pub fn show_filter_panel(
    ui: &mut egui::Ui,
    filter: &FilterSelection,
    region_options: &[ChoiceOption],
    industry_options: &[ChoiceOption],
) -> Option<UiEvent> {
    let mut region = filter.region_choice().to_string();
    let mut industry = filter.industry_choice().to_string();

    let mut changed = false;
    let mut cleared = false;
    ui.horizontal_wrapped(|ui| {
        changed |= choice_combo(ui, "region_filter", "State", region_options, &mut region);
        ui.add_space(12.0);
        changed |= choice_combo(
            ui,
            "industry_filter",
            "Industry",
            industry_options,
            &mut industry,
        );
        if !filter.is_empty() {
            ui.add_space(12.0);
            cleared = ui.button("Clear filters").clicked();
        }
    });

    if cleared {
        Some(UiEvent::FilterChanged(FilterSelection::all()))
    } else if changed {
        Some(UiEvent::FilterChanged(FilterSelection::from_choices(
            &region, &industry,
        )))
    } else {
        None
    }
}
