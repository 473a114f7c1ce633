//! Day view: a single pinned day column over the shared time grid.

use crate::interaction::grid::GridScale;
use crate::interaction::resize::ResizeConfig;
use crate::models::event::CalendarEvent;
use crate::ui_egui::resize::BlockResizeState;

use super::palette::TimeGridPalette;
use super::time_grid::{
    draw_current_time_indicator, layout_for, render_day_header, render_time_grid,
};
use super::{render_block_layer, ViewInteractionResult};

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        day_index: usize,
        events: &[CalendarEvent],
        resize: &mut BlockResizeState,
        config: ResizeConfig,
        selected: Option<u64>,
    ) -> ViewInteractionResult {
        let days = [day_index];
        let layout = layout_for(ui.available_width(), 1);
        let scale = GridScale::new(config.pixels_per_minute);
        let palette = TimeGridPalette::from_ui(ui);

        render_day_header(ui, &layout, &days);

        egui::ScrollArea::vertical()
            .id_source("day_view_scroll")
            .show(ui, |ui| {
                let grid_rect = render_time_grid(ui, &layout, scale, &palette);
                let result = render_block_layer(
                    ui, grid_rect, &layout, scale, &days, events, resize, config, selected,
                );
                draw_current_time_indicator(ui, grid_rect, &layout, scale, &days, &palette);
                result
            })
            .inner
    }
}
