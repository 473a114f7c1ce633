//! Top toolbar: view switcher, day navigation, analytics toggle.

use chrono::{Datelike, Local};

use super::app::ViewType;
use crate::utils::time::day_label;

pub(crate) fn render_toolbar(
    ui: &mut egui::Ui,
    current_view: &mut ViewType,
    selected_day: &mut usize,
    show_analytics: &mut bool,
) {
    ui.horizontal(|ui| {
        ui.heading("SuperOS");
        ui.separator();

        ui.selectable_value(current_view, ViewType::Day, "Day");
        ui.selectable_value(current_view, ViewType::Week, "Week");

        if *current_view == ViewType::Day {
            ui.separator();
            if ui.button("◀").clicked() && *selected_day > 0 {
                *selected_day -= 1;
            }
            ui.label(day_label(*selected_day));
            if ui.button("▶").clicked() && *selected_day < 6 {
                *selected_day += 1;
            }
            if ui.button("Today").clicked() {
                *selected_day = Local::now().weekday().num_days_from_monday() as usize;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.toggle_value(show_analytics, "Analytics");
        });
    });
}
