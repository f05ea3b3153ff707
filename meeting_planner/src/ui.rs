//! UI module - egui control panels: add-zone picker, zone list with dismiss
//! buttons, and the anchor-hour slider.

use chrono::NaiveDate;
use chrono_tz::Tz;
use nannou_egui::egui;
use planner_core::{available_entries, label_for, ANCHOR_ZONE, WORK_END_HOUR, WORK_START_HOUR};

/// Result of control panel interactions
#[derive(Default)]
pub struct ControlsResult {
    /// Zone picked from the add combo
    pub add_zone: Option<Tz>,
    /// Zone whose dismiss button was clicked
    pub remove_zone: Option<Tz>,
    /// Snap the slider to the current anchor-zone hour
    pub snap_to_now: bool,
    /// Reduced motion setting changed
    pub reduced_motion_changed: bool,
}

/// Draw the header bar with the title and the anchor-zone date
pub fn draw_header(ctx: &egui::Context, anchor_date: NaiveDate) {
    egui::TopBottomPanel::top("header")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Timezone Meeting Planner");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} · {}",
                        ANCHOR_ZONE.name(),
                        anchor_date.format("%A, %d %B %Y")
                    ));
                });
            });
        });
}

/// Draw the controls window
pub fn draw_controls(
    ctx: &egui::Context,
    zones: &[Tz],
    slider_hour: &mut u32,
    reduced_motion: &mut bool,
) -> ControlsResult {
    let mut result = ControlsResult::default();

    egui::Window::new("Plan")
        .collapsible(true)
        .resizable(false)
        .default_width(250.0)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 48.0])
        .show(ctx, |ui| {
            // Add-zone picker; already-selected entries are excluded
            let open_entries = available_entries(zones);
            egui::ComboBox::from_id_source("add_zone")
                .selected_text("Add timezone…")
                .width(210.0)
                .show_ui(ui, |ui| {
                    if open_entries.is_empty() {
                        ui.label("All zones already shown");
                    }
                    for entry in &open_entries {
                        if ui.selectable_label(false, entry.label).clicked() {
                            result.add_zone = Some(entry.tz);
                        }
                    }
                });

            ui.separator();

            // Selected zones with dismiss buttons
            let can_remove = zones.len() > 1;
            for &tz in zones {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(can_remove, egui::Button::new("✕").small())
                        .clicked()
                    {
                        result.remove_zone = Some(tz);
                    }
                    ui.label(label_for(tz));
                    ui.small(tz.name());
                });
            }
            if !can_remove {
                ui.small("The last zone cannot be removed");
            }

            ui.separator();

            // Anchor-hour slider
            ui.label("Explore time:");
            let slider_text = format!("{:02}:00 (London)", *slider_hour);
            ui.add(egui::Slider::new(slider_hour, 0..=23).text(slider_text));
            if ui.button("Now").clicked() {
                result.snap_to_now = true;
            }

            ui.separator();

            if ui.checkbox(reduced_motion, "Reduced motion").changed() {
                result.reduced_motion_changed = true;
            }
            ui.small(format!(
                "Working hours {:02}:00–{:02}:00 local",
                WORK_START_HOUR, WORK_END_HOUR
            ));
        });

    result
}
