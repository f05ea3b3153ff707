//! Row module - per-zone strip data derived from hour projections.
//!
//! Each selected zone becomes one `ZoneRow`: a readout at the slider hour and
//! 24 cells, one per anchor-zone hour. Failed projections leave `None` cells,
//! which the renderer draws as a dash instead of aborting the frame.

use chrono::NaiveDate;
use chrono_tz::Tz;
use planner_core::{label_for, project, Projection};

/// Number of cells in a strip, one per anchor-zone hour
pub const HOURS_PER_DAY: usize = 24;

/// Everything needed to draw one zone's row
#[derive(Debug, Clone)]
pub struct ZoneRow {
    pub tz: Tz,
    pub label: &'static str,
    /// "HH:MM" at the slider hour, None when the projection fails
    pub readout: Option<String>,
    /// "Tomorrow"/"Yesterday" tag at the slider hour
    pub day_tag: Option<&'static str>,
    /// Projected local hour per anchor hour cell
    pub cells: [Option<u32>; HOURS_PER_DAY],
}

/// Build the row for one zone on the given anchor date
pub fn build_row(tz: Tz, date: NaiveDate, slider_hour: u32) -> ZoneRow {
    let mut cells = [None; HOURS_PER_DAY];
    for (h, cell) in cells.iter_mut().enumerate() {
        *cell = project(tz, date, h as u32).map(|p| p.hour);
    }

    let at_slider = project(tz, date, slider_hour);

    ZoneRow {
        tz,
        label: label_for(tz),
        readout: at_slider.as_ref().map(Projection::format_hm),
        day_tag: at_slider.as_ref().and_then(Projection::day_tag),
        cells,
    }
}

/// Build rows for all selected zones, in display order
pub fn build_rows(zones: &[Tz], date: NaiveDate, slider_hour: u32) -> Vec<ZoneRow> {
    zones
        .iter()
        .map(|&tz| build_row(tz, date, slider_hour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ANCHOR_ZONE;

    fn quiet_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_anchor_row_is_identity() {
        let row = build_row(ANCHOR_ZONE, quiet_date(), 12);
        for (h, cell) in row.cells.iter().enumerate() {
            assert_eq!(*cell, Some(h as u32));
        }
        assert_eq!(row.readout.as_deref(), Some("12:00"));
        assert_eq!(row.day_tag, None);
    }

    #[test]
    fn test_all_cells_populated_for_catalog_zones() {
        for entry in &planner_core::CATALOG {
            let row = build_row(entry.tz, quiet_date(), 0);
            assert!(row.cells.iter().all(Option::is_some), "{}", entry.tz.name());
            assert_eq!(row.label, entry.label);
        }
    }

    #[test]
    fn test_rows_follow_selection_order() {
        let zones = [chrono_tz::Europe::London, chrono_tz::Asia::Tokyo];
        let rows = build_rows(&zones, quiet_date(), 9);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tz, zones[0]);
        assert_eq!(rows[1].tz, zones[1]);
    }

    #[test]
    fn test_sydney_evening_tagged_tomorrow() {
        let row = build_row(chrono_tz::Australia::Sydney, quiet_date(), 22);
        assert_eq!(row.day_tag, Some("Tomorrow"));
    }
}
