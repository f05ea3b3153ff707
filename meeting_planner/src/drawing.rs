//! Drawing module - zone row cards, hour strips, and the legend.
//!
//! Renders the planner's light indigo "paper card" look: one white card per
//! zone with a 24-cell strip, green cells for working hours, and an indigo
//! ring on the cell under the slider.

use nannou::prelude::*;
use planner_core::{is_working_hour, WORK_END_HOUR, WORK_START_HOUR};

use crate::rows::ZoneRow;

/// Color palette for the planner theme - light indigo over white cards
pub mod colors {
    use nannou::prelude::*;

    /// Pale indigo background
    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 238,
        green: 242,
        blue: 255,
        standard: std::marker::PhantomData,
    };

    /// White card surface
    pub const CARD: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };

    /// Soft green - working-hour cells
    pub const CELL_WORKING: Srgb<u8> = Srgb {
        red: 187,
        green: 247,
        blue: 208,
        standard: std::marker::PhantomData,
    };

    /// Near-white gray - off-hour cells
    pub const CELL_OFF: Srgb<u8> = Srgb {
        red: 249,
        green: 250,
        blue: 251,
        standard: std::marker::PhantomData,
    };

    /// Light gray cell borders
    pub const CELL_BORDER: Srgb<u8> = Srgb {
        red: 229,
        green: 231,
        blue: 235,
        standard: std::marker::PhantomData,
    };

    /// Indigo emphasis ring on the slider-hour cell
    pub const CURRENT_RING: Srgb<u8> = Srgb {
        red: 99,
        green: 102,
        blue: 241,
        standard: std::marker::PhantomData,
    };

    /// Dark gray primary text
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 31,
        green: 41,
        blue: 55,
        standard: std::marker::PhantomData,
    };

    /// Muted gray secondary text
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 107,
        green: 114,
        blue: 128,
        standard: std::marker::PhantomData,
    };

    /// Deep indigo time readout
    pub const READOUT: Srgb<u8> = Srgb {
        red: 79,
        green: 70,
        blue: 229,
        standard: std::marker::PhantomData,
    };

    /// Green legend text
    pub const LEGEND_WORKING: Srgb<u8> = Srgb {
        red: 22,
        green: 163,
        blue: 74,
        standard: std::marker::PhantomData,
    };
}

/// Layout for the stacked zone rows
pub struct StripLayout {
    /// Top edge of the first row
    pub rows_top: f32,
    /// Height of one row card
    pub row_height: f32,
    /// Vertical gap between rows
    pub row_gap: f32,
    /// Width of a row card (and its strip)
    pub row_width: f32,
    /// Width of one hour cell
    pub cell_width: f32,
    /// Height of the hour strip inside a card
    pub strip_height: f32,
}

impl StripLayout {
    pub fn calculate(window_rect: Rect, row_count: usize) -> Self {
        let row_width = (window_rect.w() - 120.0).clamp(560.0, 960.0);
        let row_gap = 16.0;
        let available = window_rect.h() - 170.0;
        let row_height =
            (available / row_count.max(1) as f32 - row_gap).clamp(84.0, 140.0);

        Self {
            rows_top: window_rect.top() - 64.0,
            row_height,
            row_gap,
            row_width,
            cell_width: row_width / 24.0,
            strip_height: row_height * 0.42,
        }
    }

    /// Center y of the row at the given index
    pub fn row_center_y(&self, index: usize) -> f32 {
        self.rows_top - (self.row_height + self.row_gap) * index as f32 - self.row_height / 2.0
    }
}

/// Draw every zone row, top to bottom in selection order
pub fn draw_zone_rows(
    draw: &Draw,
    rows: &[ZoneRow],
    layout: &StripLayout,
    slider_hour: u32,
    animation_time: f32,
    reduced_motion: bool,
) {
    for (i, row) in rows.iter().enumerate() {
        draw_zone_row(
            draw,
            row,
            layout,
            layout.row_center_y(i),
            slider_hour,
            animation_time,
            reduced_motion,
        );
    }
}

fn draw_zone_row(
    draw: &Draw,
    row: &ZoneRow,
    layout: &StripLayout,
    center_y: f32,
    slider_hour: u32,
    animation_time: f32,
    reduced_motion: bool,
) {
    let half_w = layout.row_width / 2.0;

    // Card surface
    draw.rect()
        .x_y(0.0, center_y)
        .w_h(layout.row_width + 28.0, layout.row_height)
        .color(colors::CARD);

    // Header line: label, readout at the slider hour, day tag
    let header_y = center_y + layout.row_height / 2.0 - 20.0;

    draw.text(row.label)
        .x_y(-half_w + 80.0, header_y)
        .color(colors::TEXT_PRIMARY)
        .font_size(18)
        .w(160.0);

    let readout = row.readout.as_deref().unwrap_or("—");
    draw.text(readout)
        .x_y(-half_w + 230.0, header_y)
        .color(colors::READOUT)
        .font_size(22)
        .w(110.0);

    if let Some(tag) = row.day_tag {
        draw.text(tag)
            .x_y(-half_w + 330.0, header_y)
            .color(colors::TEXT_SECONDARY)
            .font_size(12)
            .w(120.0);
    }

    // Hour strip
    let strip_y = center_y - layout.row_height / 2.0 + layout.strip_height / 2.0 + 12.0;

    for (h, cell) in row.cells.iter().enumerate() {
        let x = -half_w + layout.cell_width * (h as f32 + 0.5);

        let fill = match cell {
            Some(hour) if is_working_hour(*hour) => colors::CELL_WORKING,
            _ => colors::CELL_OFF,
        };

        draw.rect()
            .x_y(x, strip_y)
            .w_h(layout.cell_width - 1.0, layout.strip_height)
            .color(fill)
            .stroke(colors::CELL_BORDER)
            .stroke_weight(1.0);

        let digits = match cell {
            Some(hour) => format!("{:02}", hour),
            None => "—".to_string(),
        };
        draw.text(&digits)
            .x_y(x, strip_y)
            .color(colors::TEXT_SECONDARY)
            .font_size(11)
            .w(layout.cell_width);
    }

    // Emphasis ring on the slider-hour cell, with a subtle pulse
    let ring_x = -half_w + layout.cell_width * (slider_hour as f32 + 0.5);
    let pulse = if reduced_motion {
        0.0
    } else {
        (animation_time * 4.0).sin() * 0.75
    };
    draw.rect()
        .x_y(ring_x, strip_y)
        .w_h(layout.cell_width - 1.0, layout.strip_height)
        .no_fill()
        .stroke(colors::CURRENT_RING)
        .stroke_weight(2.5 + pulse);

    // Strip edge labels
    let footer_y = strip_y - layout.strip_height / 2.0 - 10.0;
    draw.text("00:00")
        .x_y(-half_w + 20.0, footer_y)
        .color(colors::TEXT_SECONDARY)
        .font_size(10)
        .w(50.0);
    draw.text("23:00")
        .x_y(half_w - 20.0, footer_y)
        .color(colors::TEXT_SECONDARY)
        .font_size(10)
        .w(50.0);
}

/// Draw the working-hours legend under the rows
pub fn draw_legend(draw: &Draw, window_rect: Rect) {
    let text = format!(
        "Green = working hours ({:02}:00–{:02}:00 local)",
        WORK_START_HOUR, WORK_END_HOUR
    );
    draw.text(&text)
        .x_y(0.0, window_rect.bottom() + 48.0)
        .color(colors::LEGEND_WORKING)
        .font_size(13)
        .w(420.0);
}

/// Draw keyboard shortcuts help
pub fn draw_help_text(draw: &Draw, window_rect: Rect) {
    draw.text("←/→: step hour  |  N: now  |  R: reduced motion")
        .x_y(0.0, window_rect.bottom() + 24.0)
        .color(srgba(107u8, 114u8, 128u8, 150u8))
        .font_size(11)
        .w(460.0);
}
