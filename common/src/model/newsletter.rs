//! Single-send newsletter campaigns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mail::MailContentBundle;
use super::reduction::ReductionConfig;
use super::stats::EntityStats;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewsletterCriteria {
    /// Only subscribed contacts receive the newsletter.
    pub subscribed: bool,
}

/// A single-send (non-stepped) campaign targeting one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub nom: String,
    pub site_id: String,
    pub site_name: String,
    pub mail: MailContentBundle,
    pub criteria: NewsletterCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction: Option<ReductionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sent: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_send: Option<DateTime<Utc>>,
    pub actif: bool,
    pub date_creation: DateTime<Utc>,
    pub stats: EntityStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reduction::ReductionType;

    #[test]
    fn newsletter_round_trips_and_accepts_legacy_reduction_labels() {
        let newsletter = Newsletter {
            id: "n1".to_string(),
            nom: "Spring news".to_string(),
            site_id: "site-1".to_string(),
            site_name: "Main shop".to_string(),
            mail: MailContentBundle::default(),
            criteria: NewsletterCriteria { subscribed: true },
            reduction: None,
            last_sent: None,
            next_send: None,
            actif: true,
            date_creation: Utc::now(),
            stats: EntityStats::zero(),
        };
        let json = serde_json::to_string(&newsletter).unwrap();
        let back: Newsletter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, newsletter);

        // Newsletter payloads historically used "%"/"€" as the type labels.
        let patched = json.replace("\"reduction\":null", "");
        let mut value: serde_json::Value = serde_json::from_str(&patched).unwrap();
        value["reduction"] = serde_json::json!({
            "actif": true,
            "montant": 15,
            "type": "€",
            "dureeValidite": 3
        });
        let back: Newsletter = serde_json::from_value(value).unwrap();
        let reduction = back.reduction.unwrap();
        assert_eq!(reduction.kind, ReductionType::FixedAmount);
        assert_eq!(reduction.montant, 15);
    }
}
