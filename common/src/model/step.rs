//! One timed send within a cart-recovery sequence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mail::MailContentBundle;
use super::reduction::ReductionConfig;

/// Unit of a step delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DelayUnit {
    #[default]
    #[serde(rename = "heures")]
    Hours,
    #[serde(rename = "jours")]
    Days,
}

impl DelayUnit {
    pub fn label(self) -> &'static str {
        match self {
            DelayUnit::Hours => "hours",
            DelayUnit::Days => "days",
        }
    }

    /// Singular/plural noun for a given count.
    pub fn noun(self, count: u32) -> &'static str {
        match (self, count) {
            (DelayUnit::Hours, 1) => "hour",
            (DelayUnit::Hours, _) => "hours",
            (DelayUnit::Days, 1) => "day",
            (DelayUnit::Days, _) => "days",
        }
    }
}

/// Campaign label for the step at a 1-based ordinal position.
pub fn step_campaign(position: usize) -> String {
    format!("cart_recovery_step{position}")
}

/// One send within a cart-recovery scenario. Array position in the parent's
/// `etapes` is the send order; there is no separate ordering field. The
/// delay is relative to the previous step, or to cart abandonment for the
/// first step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub delai: u32,
    pub delai_unite: DelayUnit,
    pub mail: MailContentBundle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction: Option<ReductionConfig>,
}

impl Step {
    /// New step for a 1-based ordinal position: unique id, 4-hour default
    /// delay, UTM defaults derived from the position.
    pub fn new(position: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            delai: 4,
            delai_unite: DelayUnit::Hours,
            mail: MailContentBundle::with_utm_defaults(&step_campaign(position)),
            reduction: None,
        }
    }

    /// Human-readable schedule for the step at `index` (0-based array
    /// position). Only the first step counts from cart abandonment.
    pub fn schedule_label(&self, index: usize) -> String {
        let quantity = format!("{} {}", self.delai, self.delai_unite.noun(self.delai));
        if index == 0 {
            format!("{quantity} after abandonment")
        } else {
            format!("{quantity} after the previous step")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_defaults_to_four_hours_with_position_utms() {
        let step = Step::new(3);
        assert_eq!(step.delai, 4);
        assert_eq!(step.delai_unite, DelayUnit::Hours);
        assert_eq!(step.mail.banner_utm.campaign, "cart_recovery_step3");
        assert_eq!(step.mail.button_utm.campaign, "cart_recovery_step3");
        assert!(step.reduction.is_none());
        assert!(!step.id.is_empty());
    }

    #[test]
    fn schedule_wording_matches_send_semantics() {
        let first = Step {
            delai: 4,
            delai_unite: DelayUnit::Hours,
            ..Step::new(1)
        };
        let second = Step {
            delai: 1,
            delai_unite: DelayUnit::Days,
            ..Step::new(2)
        };
        assert_eq!(first.schedule_label(0), "4 hours after abandonment");
        assert_eq!(second.schedule_label(1), "1 day after the previous step");
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: Vec<String> = (0..50).map(|i| Step::new(i + 1).id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn delay_unit_wire_labels_are_french() {
        assert_eq!(serde_json::to_string(&DelayUnit::Hours).unwrap(), "\"heures\"");
        assert_eq!(serde_json::to_string(&DelayUnit::Days).unwrap(), "\"jours\"");
    }
}
