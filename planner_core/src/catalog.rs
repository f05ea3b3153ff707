//! Timezone catalog - the static set of zones offered by the Add control.
//!
//! Every entry is a `chrono_tz` zone constant, so an invalid IANA identifier
//! cannot reach the selection list in the first place.

use chrono_tz::Tz;

/// A catalog entry pairing an IANA zone with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneEntry {
    pub tz: Tz,
    pub label: &'static str,
}

/// The fixed set of zones the planner offers
pub const CATALOG: [ZoneEntry; 15] = [
    ZoneEntry { tz: chrono_tz::Europe::London, label: "London" },
    ZoneEntry { tz: chrono_tz::America::New_York, label: "New York" },
    ZoneEntry { tz: chrono_tz::America::Los_Angeles, label: "Los Angeles" },
    ZoneEntry { tz: chrono_tz::America::Chicago, label: "Chicago" },
    ZoneEntry { tz: chrono_tz::Europe::Paris, label: "Paris" },
    ZoneEntry { tz: chrono_tz::Europe::Berlin, label: "Berlin" },
    ZoneEntry { tz: chrono_tz::Asia::Tokyo, label: "Tokyo" },
    ZoneEntry { tz: chrono_tz::Asia::Shanghai, label: "Shanghai" },
    ZoneEntry { tz: chrono_tz::Asia::Singapore, label: "Singapore" },
    ZoneEntry { tz: chrono_tz::Asia::Dubai, label: "Dubai" },
    ZoneEntry { tz: chrono_tz::Australia::Sydney, label: "Sydney" },
    ZoneEntry { tz: chrono_tz::Pacific::Auckland, label: "Auckland" },
    ZoneEntry { tz: chrono_tz::Asia::Hong_Kong, label: "Hong Kong" },
    ZoneEntry { tz: chrono_tz::Asia::Kolkata, label: "Mumbai" },
    ZoneEntry { tz: chrono_tz::Europe::Moscow, label: "Moscow" },
];

/// Look up the display label for a zone, falling back to its IANA name
pub fn label_for(tz: Tz) -> &'static str {
    CATALOG
        .iter()
        .find(|entry| entry.tz == tz)
        .map(|entry| entry.label)
        .unwrap_or_else(|| tz.name())
}

/// Catalog entries not yet present in the given selection, in catalog order
pub fn available_entries(selected: &[Tz]) -> Vec<ZoneEntry> {
    CATALOG
        .iter()
        .filter(|entry| !selected.contains(&entry.tz))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_zones() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.tz, b.tz, "duplicate catalog zone {}", a.tz.name());
            }
        }
    }

    #[test]
    fn test_labels_nonempty() {
        for entry in &CATALOG {
            assert!(!entry.label.is_empty());
        }
    }

    #[test]
    fn test_label_for_catalog_zone() {
        assert_eq!(label_for(chrono_tz::Asia::Kolkata), "Mumbai");
        assert_eq!(label_for(chrono_tz::Europe::London), "London");
    }

    #[test]
    fn test_label_for_falls_back_to_iana_name() {
        assert_eq!(label_for(chrono_tz::Etc::UTC), "Etc/UTC");
    }

    #[test]
    fn test_available_excludes_selected() {
        let selected = vec![chrono_tz::Europe::London, chrono_tz::Australia::Sydney];
        let open = available_entries(&selected);
        assert_eq!(open.len(), CATALOG.len() - 2);
        assert!(open.iter().all(|e| !selected.contains(&e.tz)));
    }
}
