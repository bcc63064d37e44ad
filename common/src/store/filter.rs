//! Derived list filtering.
//!
//! Filters are a computed view over the store's collection: applying them
//! never mutates the underlying `Vec`, and resetting them restores the
//! full set exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Inclusive creation-date window; `None` bounds are open.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from
            && date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && date > to
        {
            return false;
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Current list filters: site and creation-date range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub site_id: Option<String>,
    pub date_range: DateRange,
}

impl ListFilter {
    pub fn is_active(&self) -> bool {
        self.site_id.is_some() || !self.date_range.is_open()
    }

    pub fn matches<T: Entity>(&self, entity: &T) -> bool {
        if let Some(site_id) = &self.site_id
            && entity.site_id() != site_id
        {
            return false;
        }
        self.date_range
            .contains(entity.date_creation().date_naive())
    }

    /// Computes the filtered view; the input slice is untouched.
    pub fn apply<'a, T: Entity>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Clears every filter. Idempotent: after a reset the filtered view is
    /// the full collection again.
    pub fn reset(&mut self) {
        *self = ListFilter::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::MailContentBundle;
    use crate::model::scenario::{Scenario, ScenarioCriteria, ScenarioKind};
    use crate::model::stats::EntityStats;
    use chrono::{TimeZone, Utc};

    fn scenario(id: &str, site: &str, day: u32) -> Scenario {
        Scenario {
            id: id.to_string(),
            nom: id.to_string(),
            site_id: site.to_string(),
            site_name: site.to_string(),
            mail: MailContentBundle::default(),
            criteres: ScenarioCriteria::default_for(ScenarioKind::Birthday),
            reduction: None,
            etapes: Vec::new(),
            actif: true,
            date_creation: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            statistiques: EntityStats::zero(),
        }
    }

    #[test]
    fn site_filter_then_reset_restores_the_full_set() {
        let items = vec![
            scenario("1", "site-a", 1),
            scenario("2", "site-b", 2),
            scenario("3", "site-a", 3),
        ];
        let mut filter = ListFilter::default();
        filter.site_id = Some("site-a".to_string());

        let filtered: Vec<&str> = filter
            .apply(&items)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(filtered, ["1", "3"]);

        filter.reset();
        assert!(!filter.is_active());
        let full: Vec<&str> = filter
            .apply(&items)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(full, ["1", "2", "3"]);

        // Reset again: still the exact same view.
        filter.reset();
        assert_eq!(filter.apply(&items).len(), 3);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let items = vec![
            scenario("1", "site-a", 1),
            scenario("2", "site-a", 5),
            scenario("3", "site-a", 9),
        ];
        let filter = ListFilter {
            site_id: None,
            date_range: DateRange {
                from: NaiveDate::from_ymd_opt(2026, 3, 5),
                to: NaiveDate::from_ymd_opt(2026, 3, 9),
            },
        };
        let filtered: Vec<&str> = filter
            .apply(&items)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(filtered, ["2", "3"]);
    }

    #[test]
    fn applying_a_filter_never_mutates_the_input() {
        let items = vec![scenario("1", "site-a", 1), scenario("2", "site-b", 2)];
        let snapshot = items.clone();
        let filter = ListFilter {
            site_id: Some("site-b".to_string()),
            date_range: DateRange::default(),
        };
        let _ = filter.apply(&items);
        assert_eq!(items, snapshot);
    }
}
