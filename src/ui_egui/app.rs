//! Application shell.
//!
//! `TimeBlockApp` owns the canonical event list and the decision of when a
//! resize preview becomes canonical: the views stream ephemeral pairs out
//! of the resize core every frame, and the app commits the final pair when
//! a gesture ends.

use chrono::{Datelike, Local};
use egui_extras::{Column, TableBuilder};

use crate::interaction::resize::ResizeConfig;
use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::services::analytics::{busiest_day, summarize};
use crate::services::{fixtures, settings};
use crate::ui_egui::resize::BlockResizeState;
use crate::ui_egui::toolbar::render_toolbar;
use crate::ui_egui::views::day_view::DayView;
use crate::ui_egui::views::week_view::WeekView;
use crate::ui_egui::views::ViewInteractionResult;
use crate::utils::time::{day_label, format_duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
}

impl ViewType {
    fn parse(name: &str) -> Self {
        match name {
            "Day" => ViewType::Day,
            _ => ViewType::Week,
        }
    }
}

pub struct TimeBlockApp {
    settings: Settings,
    /// Canonical event list; resize previews never touch it mid-gesture
    events: Vec<CalendarEvent>,
    current_view: ViewType,
    /// Pinned day column for the day view (Monday = 0)
    selected_day: usize,
    selected_block: Option<u64>,
    show_analytics: bool,
    resize: BlockResizeState,
}

impl eframe::App for TimeBlockApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            render_toolbar(
                ui,
                &mut self.current_view,
                &mut self.selected_day,
                &mut self.show_analytics,
            );
        });

        if self.show_analytics {
            egui::SidePanel::right("analytics")
                .default_width(220.0)
                .show(ctx, |ui| self.render_analytics(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let config = self.resize_config();
            let result = match self.current_view {
                ViewType::Week => WeekView::show(
                    ui,
                    &self.events,
                    &mut self.resize,
                    config,
                    self.selected_block,
                ),
                ViewType::Day => DayView::show(
                    ui,
                    self.selected_day,
                    &self.events,
                    &mut self.resize,
                    config,
                    self.selected_block,
                ),
            };
            self.apply_interaction(result);
        });
    }
}

impl TimeBlockApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = settings::load_or_default();
        log::info!(
            "Grid config: {} px/min, snap {} min, floor {} min",
            settings.pixels_per_minute,
            settings.snap_interval_minutes,
            settings.min_duration_minutes
        );

        let events = fixtures::demo_week();
        log::info!("Seeded {} fixture blocks", events.len());
        log::trace!(
            "fixture blocks: {}",
            serde_json::to_string(&events).unwrap_or_default()
        );

        let current_view = ViewType::parse(&settings.current_view);
        let show_analytics = settings.show_analytics;
        Self {
            settings,
            events,
            current_view,
            selected_day: Local::now().weekday().num_days_from_monday() as usize,
            selected_block: None,
            show_analytics,
            resize: BlockResizeState::default(),
        }
    }

    fn resize_config(&self) -> ResizeConfig {
        ResizeConfig {
            pixels_per_minute: self.settings.pixels_per_minute,
            snap_interval: self.settings.snap_interval_minutes,
            min_duration: self.settings.min_duration_minutes,
            allow_cross_midnight: self.settings.allow_cross_midnight,
        }
    }

    /// Commit completed gestures into the canonical list.
    fn apply_interaction(&mut self, result: ViewInteractionResult) {
        if let Some(id) = result.selected {
            self.selected_block = Some(id);
        }
        if let Some(commit) = result.committed {
            if let Some(event) = self.events.iter_mut().find(|e| e.id == commit.event_id) {
                log::debug!(
                    "commit resize: block {} {}+{} -> {}+{}",
                    commit.event_id,
                    event.start_minutes,
                    event.duration_minutes,
                    commit.start_minutes,
                    commit.duration_minutes
                );
                event.start_minutes = commit.start_minutes;
                event.duration_minutes = commit.duration_minutes;
            }
        }
    }

    fn render_analytics(&self, ui: &mut egui::Ui) {
        let summary = summarize(&self.events);

        ui.heading("This week");
        ui.add_space(4.0);
        ui.label(format!(
            "{} blocks, {}",
            summary.block_count,
            format_duration(summary.total_minutes)
        ));
        ui.label(format!("Done: {}", format_duration(summary.done_minutes)));
        ui.label(format!(
            "In progress: {}",
            format_duration(summary.in_progress_minutes)
        ));
        ui.label(format!(
            "Planned: {}",
            format_duration(summary.planned_minutes)
        ));
        ui.label(format!("Open tasks: {}", summary.task_count));
        if let Some(day) = busiest_day(&summary) {
            ui.label(format!("Busiest day: {}", day_label(day)));
        }
        ui.add_space(8.0);
        ui.separator();

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::remainder())
            .header(18.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Day");
                });
                header.col(|ui| {
                    ui.strong("Scheduled");
                });
            })
            .body(|mut body| {
                for (day, minutes) in summary.minutes_per_day.iter().enumerate() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(day_label(day));
                        });
                        row.col(|ui| {
                            ui.label(format_duration(*minutes));
                        });
                    });
                }
            });
    }
}
