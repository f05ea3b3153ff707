//! Selection list - the ordered, duplicate-free set of zones on display.

use chrono_tz::Tz;

use crate::projection::ANCHOR_ZONE;

/// Zones currently shown, in insertion order (which is display order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList {
    zones: Vec<Tz>,
}

impl SelectionList {
    /// Build a list from initial zones, dropping duplicates.
    /// An empty input falls back to the anchor zone so the display is never empty.
    pub fn new(initial: Vec<Tz>) -> Self {
        let mut zones: Vec<Tz> = Vec::with_capacity(initial.len());
        for tz in initial {
            if !zones.contains(&tz) {
                zones.push(tz);
            }
        }
        if zones.is_empty() {
            zones.push(ANCHOR_ZONE);
        }
        Self { zones }
    }

    /// Append a zone; no-op when already present. Returns whether the list changed.
    pub fn add(&mut self, tz: Tz) -> bool {
        if self.zones.contains(&tz) {
            return false;
        }
        self.zones.push(tz);
        true
    }

    /// Remove a zone; refused for the last remaining entry.
    /// Returns whether the list changed.
    pub fn remove(&mut self, tz: Tz) -> bool {
        if self.zones.len() <= 1 {
            return false;
        }
        let before = self.zones.len();
        self.zones.retain(|&z| z != tz);
        self.zones.len() != before
    }

    pub fn contains(&self, tz: Tz) -> bool {
        self.zones.contains(&tz)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Whether removal is currently allowed
    pub fn can_remove(&self) -> bool {
        self.zones.len() > 1
    }

    pub fn zones(&self) -> &[Tz] {
        &self.zones
    }
}

impl Default for SelectionList {
    fn default() -> Self {
        Self::new(vec![chrono_tz::Europe::London, chrono_tz::Australia::Sydney])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Tz = chrono_tz::Europe::London;
    const SYDNEY: Tz = chrono_tz::Australia::Sydney;
    const TOKYO: Tz = chrono_tz::Asia::Tokyo;

    #[test]
    fn test_add_is_idempotent() {
        let mut list = SelectionList::new(vec![LONDON]);
        assert!(list.add(TOKYO));
        let snapshot = list.clone();
        assert!(!list.add(TOKYO));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = SelectionList::new(vec![LONDON]);
        list.add(TOKYO);
        assert_eq!(list.zones(), &[LONDON, TOKYO]);
    }

    #[test]
    fn test_remove_down_to_one_then_noop() {
        let mut list = SelectionList::new(vec![LONDON, SYDNEY]);
        assert!(list.remove(LONDON));
        assert_eq!(list.zones(), &[SYDNEY]);
        assert!(!list.remove(SYDNEY));
        assert_eq!(list.zones(), &[SYDNEY]);
        assert!(!list.can_remove());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = SelectionList::new(vec![LONDON, SYDNEY]);
        assert!(!list.remove(TOKYO));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_new_drops_duplicates() {
        let list = SelectionList::new(vec![LONDON, SYDNEY, LONDON]);
        assert_eq!(list.zones(), &[LONDON, SYDNEY]);
    }

    #[test]
    fn test_new_empty_falls_back_to_anchor() {
        let list = SelectionList::new(Vec::new());
        assert_eq!(list.zones(), &[ANCHOR_ZONE]);
        assert!(!list.is_empty());
    }
}
