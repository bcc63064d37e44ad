//! Read-only statistics snapshots.
//!
//! Stats are zeroed when an entity is created and never mutated through
//! the editors; the dashboard only aggregates and displays them.

use serde::{Deserialize, Serialize};

/// Aggregate send statistics for one scenario or newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityStats {
    pub envois: u64,
    pub ouvertures: u64,
    pub clics: u64,
    pub conversions: u64,
}

/// One bar of a pre-aggregated chart: what the charting surface consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl EntityStats {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Open rate as a fraction of sends, 0.0 when nothing was sent.
    pub fn taux_ouverture(&self) -> f64 {
        if self.envois == 0 {
            0.0
        } else {
            self.ouvertures as f64 / self.envois as f64
        }
    }

    /// Element-wise sum, used to aggregate a filtered collection.
    pub fn merged(&self, other: &EntityStats) -> EntityStats {
        EntityStats {
            envois: self.envois + other.envois,
            ouvertures: self.ouvertures + other.ouvertures,
            clics: self.clics + other.clics,
            conversions: self.conversions + other.conversions,
        }
    }

    /// Projects the snapshot into `{label, value}` points for display.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint {
                label: "Sent".to_string(),
                value: self.envois,
            },
            ChartPoint {
                label: "Opened".to_string(),
                value: self.ouvertures,
            },
            ChartPoint {
                label: "Clicked".to_string(),
                value: self.clics,
            },
            ChartPoint {
                label: "Converted".to_string(),
                value: self.conversions,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stats_are_zero() {
        assert!(EntityStats::zero().is_zero());
        assert_eq!(EntityStats::zero().taux_ouverture(), 0.0);
    }

    #[test]
    fn merged_sums_every_counter() {
        let a = EntityStats {
            envois: 10,
            ouvertures: 5,
            clics: 2,
            conversions: 1,
        };
        let b = EntityStats {
            envois: 4,
            ouvertures: 1,
            clics: 1,
            conversions: 0,
        };
        let merged = a.merged(&b);
        assert_eq!(merged.envois, 14);
        assert_eq!(merged.ouvertures, 6);
        assert_eq!(merged.clics, 3);
        assert_eq!(merged.conversions, 1);
    }

    #[test]
    fn chart_points_keep_display_order() {
        let points = EntityStats::zero().chart_points();
        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Sent", "Opened", "Clicked", "Converted"]);
    }
}
