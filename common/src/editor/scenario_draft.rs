//! Create/edit draft for a scenario.
//!
//! The draft owns a working copy of the entity. On submit it validates,
//! then either stamps fresh identity (create) or restores the original
//! `id`, `dateCreation` and `statistiques` (edit) so lifecycle metadata
//! can never be edited through the form.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::fields::{
    ValidationError, check_mail_bundle, check_positive, check_reduction, require,
};
use super::steps::{self, ReductionField, StepField, apply_reduction_field};
use crate::model::mail::{MailContentBundle, MailField, UtmKind, UtmParams};
use crate::model::reduction::ReductionConfig;
use crate::model::scenario::{Scenario, ScenarioCriteria, ScenarioKind};
use crate::model::site::Site;
use crate::model::stats::EntityStats;
use crate::model::step::DelayUnit;

/// Identity and lifecycle metadata preserved across an edit.
#[derive(Debug, Clone)]
struct OriginalMeta {
    id: String,
    date_creation: DateTime<Utc>,
    statistiques: EntityStats,
}

/// One edit to the enrollment criteria. Variants that do not match the
/// draft's scenario kind are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaField {
    DelaiCreation(u32),
    DelaiCreationUnite(DelayUnit),
    PanierTraite(bool),
    OffreSpeciale(String),
    JoursValidite(u32),
}

/// Working state of the scenario editor.
#[derive(Debug, Clone)]
pub struct ScenarioDraft {
    scenario: Scenario,
    original: Option<OriginalMeta>,
}

impl ScenarioDraft {
    /// Fresh draft with kind-specific defaults. Identity is stamped at
    /// submit, not here.
    pub fn create(kind: ScenarioKind) -> Self {
        Self {
            scenario: Scenario {
                id: String::new(),
                nom: String::new(),
                site_id: String::new(),
                site_name: String::new(),
                mail: MailContentBundle::with_utm_defaults(kind.main_campaign()),
                criteres: ScenarioCriteria::default_for(kind),
                reduction: None,
                etapes: Vec::new(),
                actif: true,
                date_creation: Utc::now(),
                statistiques: EntityStats::zero(),
            },
            original: None,
        }
    }

    /// Draft seeded from an existing scenario.
    pub fn edit(scenario: &Scenario) -> Self {
        Self {
            scenario: scenario.clone(),
            original: Some(OriginalMeta {
                id: scenario.id.clone(),
                date_creation: scenario.date_creation,
                statistiques: scenario.statistiques.clone(),
            }),
        }
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn kind(&self) -> ScenarioKind {
        self.scenario.kind()
    }

    /// Read access for the form views.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn set_nom(&mut self, nom: String) {
        self.scenario.nom = nom;
    }

    pub fn set_site(&mut self, site: Option<&Site>) {
        match site {
            Some(site) => {
                self.scenario.site_id = site.id.clone();
                self.scenario.site_name = site.name.clone();
            }
            None => {
                self.scenario.site_id.clear();
                self.scenario.site_name.clear();
            }
        }
    }

    pub fn set_actif(&mut self, actif: bool) {
        self.scenario.actif = actif;
    }

    pub fn edit_mail(&mut self, field: MailField) {
        self.scenario.mail.apply(field);
    }

    /// Bulk-resets one of the main mail's UTM sets to the kind's campaign
    /// defaults.
    pub fn reset_mail_utm(&mut self, kind: UtmKind) {
        let campaign = self.kind().main_campaign();
        *self.scenario.mail.utm_mut(kind) = UtmParams::defaults(kind, campaign);
    }

    pub fn edit_criteria(&mut self, field: CriteriaField) {
        match (&mut self.scenario.criteres, field) {
            (ScenarioCriteria::CartRecovery(c), CriteriaField::DelaiCreation(v)) => {
                c.delai_creation = v;
            }
            (ScenarioCriteria::CartRecovery(c), CriteriaField::DelaiCreationUnite(v)) => {
                c.delai_creation_unite = v;
            }
            (ScenarioCriteria::CartRecovery(c), CriteriaField::PanierTraite(v)) => {
                c.panier_traite = v;
            }
            (ScenarioCriteria::Birthday(c), CriteriaField::OffreSpeciale(v)) => {
                c.offre_speciale = v;
            }
            (ScenarioCriteria::Birthday(c), CriteriaField::JoursValidite(v)) => {
                c.jours_validite = v;
            }
            _ => {}
        }
    }

    pub fn edit_reduction(&mut self, field: ReductionField) {
        let reduction = self
            .scenario
            .reduction
            .get_or_insert_with(ReductionConfig::default);
        apply_reduction_field(reduction, field);
    }

    /// Appends a step. Only cart-recovery scenarios carry steps; for other
    /// kinds this is a no-op returning `None`.
    pub fn add_step(&mut self) -> Option<String> {
        if self.kind() != ScenarioKind::CartRecovery {
            return None;
        }
        Some(steps::add_step(&mut self.scenario.etapes))
    }

    pub fn remove_step(&mut self, id: &str) -> bool {
        steps::remove_step(&mut self.scenario.etapes, id)
    }

    pub fn update_step(&mut self, id: &str, field: StepField) -> bool {
        steps::update_step(&mut self.scenario.etapes, id, field)
    }

    pub fn reset_step_utm(&mut self, id: &str, kind: UtmKind) -> bool {
        steps::reset_step_utm(&mut self.scenario.etapes, id, kind)
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        require(&mut errors, "nom", &self.scenario.nom, "Name");
        require(&mut errors, "siteId", &self.scenario.site_id, "Site");
        check_mail_bundle(&mut errors, "", &self.scenario.mail);
        if let Some(reduction) = &self.scenario.reduction {
            check_reduction(&mut errors, "reduction.", reduction);
        }
        match &self.scenario.criteres {
            ScenarioCriteria::CartRecovery(c) => {
                check_positive(
                    &mut errors,
                    "criteres.delaiCreation",
                    c.delai_creation,
                    "Cart age delay",
                );
            }
            ScenarioCriteria::Birthday(c) => {
                check_positive(
                    &mut errors,
                    "criteres.joursValidite",
                    c.jours_validite,
                    "Offer validity",
                );
            }
        }
        for (index, step) in self.scenario.etapes.iter().enumerate() {
            let prefix = format!("etapes[{index}].");
            check_positive(
                &mut errors,
                &format!("{prefix}delai"),
                step.delai,
                "Step delay",
            );
            check_mail_bundle(&mut errors, &prefix, &step.mail);
            if let Some(reduction) = &step.reduction {
                check_reduction(&mut errors, &prefix, reduction);
            }
        }
        errors
    }

    /// Produces the complete scenario, or the per-field errors blocking it.
    ///
    /// Create: assigns a UUID id, stamps `dateCreation`, zeroes stats.
    /// Edit: restores the original id, `dateCreation` and stats.
    pub fn submit(&self) -> Result<Scenario, Vec<ValidationError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let mut scenario = self.scenario.clone();
        match &self.original {
            Some(meta) => {
                scenario.id = meta.id.clone();
                scenario.date_creation = meta.date_creation;
                scenario.statistiques = meta.statistiques.clone();
            }
            None => {
                scenario.id = Uuid::new_v4().to_string();
                scenario.date_creation = Utc::now();
                scenario.statistiques = EntityStats::zero();
            }
        }
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::MailTextField;

    fn valid_create_draft(kind: ScenarioKind) -> ScenarioDraft {
        let mut draft = ScenarioDraft::create(kind);
        draft.set_nom("Test scenario".to_string());
        draft.set_site(Some(&Site {
            id: "site-1".to_string(),
            name: "Main shop".to_string(),
        }));
        draft.edit_mail(MailField::Text(
            MailTextField::SujetMail,
            "Subject".to_string(),
        ));
        draft
    }

    #[test]
    fn create_submit_stamps_identity_and_zero_stats() {
        let before = Utc::now();
        let scenario = valid_create_draft(ScenarioKind::Birthday).submit().unwrap();

        assert!(!scenario.id.is_empty());
        assert!(scenario.date_creation >= before);
        assert!(scenario.statistiques.is_zero());
        assert_eq!(scenario.kind(), ScenarioKind::Birthday);
    }

    #[test]
    fn two_submits_never_collide_on_id() {
        let draft = valid_create_draft(ScenarioKind::Birthday);
        let a = draft.submit().unwrap();
        let b = draft.submit().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn edit_preserves_id_date_and_stats_while_applying_changes() {
        let original = valid_create_draft(ScenarioKind::CartRecovery)
            .submit()
            .unwrap();
        let mut original = original;
        original.id = "2".to_string();
        original.statistiques.envois = 42;

        let mut draft = ScenarioDraft::edit(&original);
        draft.set_nom("Renamed".to_string());
        draft.edit_mail(MailField::Text(
            MailTextField::TitreMail,
            "New title".to_string(),
        ));

        let edited = draft.submit().unwrap();
        assert_eq!(edited.id, "2");
        assert_eq!(edited.date_creation, original.date_creation);
        assert_eq!(edited.statistiques, original.statistiques);
        assert_eq!(edited.nom, "Renamed");
        assert_eq!(edited.mail.titre_mail, "New title");
    }

    #[test]
    fn submit_is_blocked_until_required_fields_are_filled() {
        let draft = ScenarioDraft::create(ScenarioKind::CartRecovery);
        let errors = draft.submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"nom"));
        assert!(fields.contains(&"siteId"));
        assert!(fields.contains(&"sujetMail"));
    }

    #[test]
    fn submit_is_blocked_by_a_malformed_utm_value() {
        use crate::model::mail::UtmField;

        let mut draft = valid_create_draft(ScenarioKind::CartRecovery);
        draft.edit_mail(MailField::Utm(
            UtmKind::Button,
            UtmField::Campaign,
            "spring sale&utm_source=evil".to_string(),
        ));

        let errors = draft.submit().unwrap_err();
        assert!(errors.iter().any(|e| e.field == "buttonUtm.campaign"));
    }

    #[test]
    fn step_errors_are_scoped_by_position() {
        let mut draft = valid_create_draft(ScenarioKind::CartRecovery);
        let id = draft.add_step().unwrap();
        draft.update_step(&id, StepField::Delai(0));

        let errors = draft.validate();
        assert!(errors.iter().any(|e| e.field == "etapes[0].delai"));
        assert!(errors.iter().any(|e| e.field == "etapes[0].sujetMail"));
    }

    #[test]
    fn steps_are_refused_outside_cart_recovery() {
        let mut draft = valid_create_draft(ScenarioKind::Birthday);
        assert!(draft.add_step().is_none());
        assert!(draft.scenario().etapes.is_empty());
    }

    #[test]
    fn main_mail_utm_reset_restores_campaign_defaults() {
        use crate::model::mail::UtmField;

        let mut draft = valid_create_draft(ScenarioKind::Birthday);
        draft.edit_mail(MailField::Utm(
            UtmKind::Banner,
            UtmField::Campaign,
            "custom".to_string(),
        ));
        assert_eq!(draft.scenario().mail.banner_utm.campaign, "custom");

        draft.reset_mail_utm(UtmKind::Banner);
        assert_eq!(
            draft.scenario().mail.banner_utm,
            UtmParams::defaults(UtmKind::Banner, "birthday")
        );
    }

    #[test]
    fn criteria_edits_ignore_mismatched_kind() {
        let mut draft = valid_create_draft(ScenarioKind::Birthday);
        draft.edit_criteria(CriteriaField::DelaiCreation(5));
        match &draft.scenario().criteres {
            ScenarioCriteria::Birthday(c) => assert_eq!(c.jours_validite, 30),
            other => panic!("kind changed unexpectedly: {other:?}"),
        }

        draft.edit_criteria(CriteriaField::JoursValidite(10));
        match &draft.scenario().criteres {
            ScenarioCriteria::Birthday(c) => assert_eq!(c.jours_validite, 10),
            other => panic!("kind changed unexpectedly: {other:?}"),
        }
    }
}
