//! Meeting Planner
//!
//! Compares wall-clock time across a set of timezones: one 24-cell strip per
//! zone, tinted by working hours, pivoting on a slider hour in London.

mod drawing;
mod rows;
mod ui;

use std::time::Duration;

use chrono_tz::Tz;
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use planner_core::{SelectionList, Ticker, WallClock, ANCHOR_ZONE};
use serde::{Deserialize, Serialize};

use crate::drawing::{colors, draw_help_text, draw_legend, draw_zone_rows, StripLayout};
use crate::rows::build_rows;
use crate::ui::{draw_controls, draw_header};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted presentation settings. Zone selections and the slider stay
/// session-local and reset on relaunch.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
        }
    }
}

/// Application state
struct Model {
    /// Zones on display, in insertion order
    selection: SelectionList,
    /// Slider hour in the anchor zone (0-23)
    slider_hour: u32,
    /// Current real time; supplies the date part for projections
    wall_clock: WallClock,
    /// 1-second cadence for wall clock refresh
    ticker: Ticker,
    /// Disables the slider-cell pulse
    reduced_motion: bool,
    /// Animation time for the pulse
    animation_time: f32,
    /// egui integration
    egui: Egui,
}

fn save_settings(model: &Model) {
    let config = Config {
        reduced_motion: model.reduced_motion,
    };
    if let Err(e) = planner_core::save_config(&config) {
        eprintln!("Failed to save settings: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window with minimum size to prevent layout issues
    let window_id = app
        .new_window()
        .title("Meeting Planner")
        .size(1100, 700)
        .min_size(800, 500)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let config: Config = planner_core::load_config().ok().flatten().unwrap_or_default();

    let wall_clock = WallClock::new();
    let slider_hour = wall_clock.hour_in(ANCHOR_ZONE);

    Model {
        selection: SelectionList::default(),
        slider_hour,
        wall_clock,
        ticker: Ticker::new(TICK_INTERVAL),
        reduced_motion: config.reduced_motion,
        animation_time: 0.0,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.animation_time = update.since_start.as_secs_f32();

    // Date-part refresh so strips stay correct across anchor-zone midnight
    if model.ticker.due() {
        model.wall_clock.refresh();
    }

    // Collect state for UI (before borrowing egui)
    let zones: Vec<Tz> = model.selection.zones().to_vec();
    let anchor_date = model.wall_clock.anchor_date();
    let mut slider_hour = model.slider_hour;
    let mut reduced_motion = model.reduced_motion;

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    draw_header(&ctx, anchor_date);
    let controls = draw_controls(&ctx, &zones, &mut slider_hour, &mut reduced_motion);

    drop(ctx);

    // Apply UI results
    model.slider_hour = slider_hour.min(23);

    if let Some(tz) = controls.add_zone {
        model.selection.add(tz);
    }
    if let Some(tz) = controls.remove_zone {
        model.selection.remove(tz);
    }
    if controls.snap_to_now {
        model.slider_hour = model.wall_clock.hour_in(ANCHOR_ZONE);
    }
    if controls.reduced_motion_changed {
        model.reduced_motion = reduced_motion;
        save_settings(model);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(colors::BACKGROUND);

    let zones = model.selection.zones();
    let layout = StripLayout::calculate(window_rect, zones.len());
    let rows = build_rows(zones, model.wall_clock.anchor_date(), model.slider_hour);

    draw_zone_rows(
        &draw,
        &rows,
        &layout,
        model.slider_hour,
        model.animation_time,
        model.reduced_motion,
    );
    draw_legend(&draw, window_rect);
    draw_help_text(&draw, window_rect);

    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Arrow keys step the slider hour, clamped at the day boundaries
        Key::Left => model.slider_hour = model.slider_hour.saturating_sub(1),
        Key::Right => model.slider_hour = (model.slider_hour + 1).min(23),

        // N - snap to the current anchor-zone hour
        Key::N => model.slider_hour = model.wall_clock.hour_in(ANCHOR_ZONE),

        // R - toggle reduced motion
        Key::R => {
            model.reduced_motion = !model.reduced_motion;
            save_settings(model);
        }

        _ => {}
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events
    model.egui.handle_raw_event(event);

    // Resync the wall clock when the window regains focus (in case the app
    // was backgrounded past a date rollover)
    if let nannou::winit::event::WindowEvent::Focused(true) = event {
        model.wall_clock.refresh();
    }
}
