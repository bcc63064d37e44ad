//! Automation scenarios: cart-recovery sequences and birthday mails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mail::MailContentBundle;
use super::reduction::ReductionConfig;
use super::stats::EntityStats;
use super::step::{DelayUnit, Step};

/// The two scenario families the dashboard builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    CartRecovery,
    Birthday,
}

impl ScenarioKind {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioKind::CartRecovery => "Cart recovery",
            ScenarioKind::Birthday => "Birthday",
        }
    }

    /// Campaign label used for a scenario's main-mail UTM defaults.
    pub fn main_campaign(self) -> &'static str {
        match self {
            ScenarioKind::CartRecovery => "cart_recovery_main",
            ScenarioKind::Birthday => "birthday",
        }
    }
}

/// Enrollment criteria for a cart-recovery scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRecoveryCriteria {
    /// Delay since the cart was created before the sequence starts.
    pub delai_creation: u32,
    pub delai_creation_unite: DelayUnit,
    /// Whether already-processed carts are enrolled too.
    pub panier_traite: bool,
}

impl Default for CartRecoveryCriteria {
    fn default() -> Self {
        Self {
            delai_creation: 1,
            delai_creation_unite: DelayUnit::Days,
            panier_traite: false,
        }
    }
}

/// Enrollment criteria for a birthday scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayCriteria {
    pub offre_speciale: String,
    pub jours_validite: u32,
}

impl Default for BirthdayCriteria {
    fn default() -> Self {
        Self {
            offre_speciale: String::new(),
            jours_validite: 30,
        }
    }
}

/// Scenario-type-specific enrollment criteria. The variant also determines
/// the scenario kind: only cart-recovery scenarios carry steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScenarioCriteria {
    #[serde(rename = "panierAbandonne")]
    CartRecovery(CartRecoveryCriteria),
    #[serde(rename = "anniversaire")]
    Birthday(BirthdayCriteria),
}

impl ScenarioCriteria {
    pub fn default_for(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::CartRecovery => {
                ScenarioCriteria::CartRecovery(CartRecoveryCriteria::default())
            }
            ScenarioKind::Birthday => ScenarioCriteria::Birthday(BirthdayCriteria::default()),
        }
    }

    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioCriteria::CartRecovery(_) => ScenarioKind::CartRecovery,
            ScenarioCriteria::Birthday(_) => ScenarioKind::Birthday,
        }
    }
}

/// A configured automation targeting one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub nom: String,
    pub site_id: String,
    pub site_name: String,
    pub mail: MailContentBundle,
    pub criteres: ScenarioCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduction: Option<ReductionConfig>,
    /// Send order is array position; empty for birthday scenarios.
    pub etapes: Vec<Step>,
    pub actif: bool,
    /// Stamped once at creation, immutable afterwards.
    pub date_creation: DateTime<Utc>,
    pub statistiques: EntityStats,
}

impl Scenario {
    pub fn kind(&self) -> ScenarioKind {
        self.criteres.kind()
    }

    /// Enrollment summary line for the detail view, e.g.
    /// `carts abandoned for 1 day`.
    pub fn enrollment_label(&self) -> String {
        match &self.criteres {
            ScenarioCriteria::CartRecovery(c) => format!(
                "carts abandoned for {} {}",
                c.delai_creation,
                c.delai_creation_unite.noun(c.delai_creation)
            ),
            ScenarioCriteria::Birthday(c) => format!(
                "birthday offer valid {} day{}",
                c.jours_validite,
                if c.jours_validite == 1 { "" } else { "s" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_scenario() -> Scenario {
        Scenario {
            id: "2".to_string(),
            nom: "Abandoned cart".to_string(),
            site_id: "site-1".to_string(),
            site_name: "Main shop".to_string(),
            mail: MailContentBundle::with_utm_defaults("cart_recovery_main"),
            criteres: ScenarioCriteria::CartRecovery(CartRecoveryCriteria::default()),
            reduction: None,
            etapes: vec![Step::new(1), Step::new(2)],
            actif: true,
            date_creation: Utc::now(),
            statistiques: EntityStats::zero(),
        }
    }

    #[test]
    fn kind_follows_the_criteria_variant() {
        let scenario = cart_scenario();
        assert_eq!(scenario.kind(), ScenarioKind::CartRecovery);
        assert_eq!(
            ScenarioCriteria::default_for(ScenarioKind::Birthday).kind(),
            ScenarioKind::Birthday
        );
    }

    #[test]
    fn enrollment_label_pluralizes() {
        let mut scenario = cart_scenario();
        assert_eq!(scenario.enrollment_label(), "carts abandoned for 1 day");
        scenario.criteres = ScenarioCriteria::CartRecovery(CartRecoveryCriteria {
            delai_creation: 3,
            ..Default::default()
        });
        assert_eq!(scenario.enrollment_label(), "carts abandoned for 3 days");
    }

    #[test]
    fn criteria_serializes_with_a_type_tag() {
        let json =
            serde_json::to_value(ScenarioCriteria::default_for(ScenarioKind::CartRecovery))
                .unwrap();
        assert_eq!(json["type"], "panierAbandonne");
        assert_eq!(json["delaiCreation"], 1);
        assert_eq!(json["delaiCreationUnite"], "jours");

        let json = serde_json::to_value(ScenarioCriteria::default_for(ScenarioKind::Birthday))
            .unwrap();
        assert_eq!(json["type"], "anniversaire");
        assert_eq!(json["joursValidite"], 30);
    }

    #[test]
    fn scenario_round_trips_through_json() {
        let scenario = cart_scenario();
        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }
}
