//! Hour projection - mapping an anchor-zone hour onto other zones' wall clocks.
//!
//! The slider picks an hour of day in the anchor zone; each selected zone shows
//! the wall time that same instant corresponds to, including any DST offset in
//! effect on the chosen date. All timezone math is delegated to `chrono-tz`.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

/// The fixed reference zone the slider hour is defined in
pub const ANCHOR_ZONE: Tz = chrono_tz::Europe::London;

/// Working-hours window in local time, half-open
pub const WORK_START_HOUR: u32 = 8;
pub const WORK_END_HOUR: u32 = 18;

/// Whether a local hour falls inside the working-hours window
pub fn is_working_hour(hour: u32) -> bool {
    (WORK_START_HOUR..WORK_END_HOUR).contains(&hour)
}

/// The wall time one anchor-zone hour maps to in a target zone
#[derive(Debug, Clone)]
pub struct Projection {
    /// Hour of day in the target zone (0-23)
    pub hour: u32,
    /// Minute within the hour (nonzero for half-hour offset zones)
    pub minute: u32,
    /// Day offset relative to the anchor date (-1, 0, +1)
    pub day_delta: i32,
    /// The full target-zone datetime for additional formatting
    pub local: DateTime<Tz>,
}

impl Projection {
    /// Format as "HH:MM" 24-hour wall time
    pub fn format_hm(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Tag shown when the projected date differs from the anchor date
    pub fn day_tag(&self) -> Option<&'static str> {
        match self.day_delta {
            -1 => Some("Yesterday"),
            0 => None,
            1 => Some("Tomorrow"),
            _ => Some("Different day"),
        }
    }
}

/// Project an hour of the fixed anchor zone onto a target zone
pub fn project(target: Tz, date: NaiveDate, anchor_hour: u32) -> Option<Projection> {
    project_in(ANCHOR_ZONE, target, date, anchor_hour)
}

/// Project `anchor_hour` on `date` in `anchor` onto `target`.
///
/// Ambiguous wall times (fall-back) resolve to their earlier reading; wall
/// times inside a spring-forward gap skip ahead one hour. Returns `None` only
/// when no instant can be derived at all; callers render such rows as "—".
pub fn project_in(anchor: Tz, target: Tz, date: NaiveDate, anchor_hour: u32) -> Option<Projection> {
    let naive = date.and_hms_opt(anchor_hour, 0, 0)?;
    let anchored = match anchor.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => anchor
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()?,
    };

    let local = anchored.with_timezone(&target);
    let day_delta = (local.date_naive() - date).num_days() as i32;

    Some(Projection {
        hour: local.hour(),
        minute: local.minute(),
        day_delta,
        local,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use chrono::{Offset, Utc};

    fn summer_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn winter_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_hour_always_in_range() {
        for date in [summer_date(), winter_date(), Utc::now().with_timezone(&ANCHOR_ZONE).date_naive()] {
            for entry in &CATALOG {
                for h in 0..24 {
                    let p = project(entry.tz, date, h)
                        .unwrap_or_else(|| panic!("no projection for {} at {}", entry.tz.name(), h));
                    assert!(p.hour < 24);
                    assert!(p.minute < 60);
                }
            }
        }
    }

    #[test]
    fn test_anchor_projects_onto_itself() {
        for h in 0..24 {
            let p = project(ANCHOR_ZONE, summer_date(), h).unwrap();
            assert_eq!(p.hour, h);
            assert_eq!(p.minute, 0);
            assert_eq!(p.day_delta, 0);
        }
    }

    #[test]
    fn test_london_noon_in_sydney() {
        // Expected hour derives from the actual offsets in effect, so the
        // assertion holds whatever the DST state of either zone.
        let date = Utc::now().with_timezone(&ANCHOR_ZONE).date_naive();
        let p = project(chrono_tz::Australia::Sydney, date, 12).unwrap();

        let instant = p.local.with_timezone(&Utc);
        let london_offset = instant
            .with_timezone(&ANCHOR_ZONE)
            .offset()
            .fix()
            .local_minus_utc()
            / 3600;
        let sydney_offset = p.local.offset().fix().local_minus_utc() / 3600;
        let expected = (12 - london_offset + sydney_offset).rem_euclid(24) as u32;

        assert_eq!(p.hour, expected);
        // GMT/BST against AEST/AEDT only ever lands on one of these
        assert!(matches!(p.hour, 21 | 22 | 23), "got {}", p.hour);
    }

    #[test]
    fn test_half_hour_offset_zone() {
        // Kolkata sits at UTC+5:30 year-round
        let p = project(chrono_tz::Asia::Kolkata, winter_date(), 9).unwrap();
        assert_eq!(p.minute, 30);
        assert_eq!(p.format_hm(), format!("{:02}:30", p.hour));
    }

    #[test]
    fn test_late_london_evening_is_sydney_tomorrow() {
        // Sydney is 9-11 hours ahead of London, so 22:00 always crosses midnight
        let p = project(chrono_tz::Australia::Sydney, summer_date(), 22).unwrap();
        assert_eq!(p.day_delta, 1);
        assert_eq!(p.day_tag(), Some("Tomorrow"));
    }

    #[test]
    fn test_spring_forward_gap_still_projects() {
        // London clocks skip 01:00-02:00 on 2025-03-30
        let gap_date = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let p = project(chrono_tz::Asia::Tokyo, gap_date, 1).unwrap();
        assert!(p.hour < 24);
    }

    #[test]
    fn test_working_hours_window() {
        for h in 0..24 {
            assert_eq!(is_working_hour(h), (8..18).contains(&h), "hour {}", h);
        }
    }
}
