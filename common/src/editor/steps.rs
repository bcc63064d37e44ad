//! Operations on a scenario's ordered step list.
//!
//! Steps have no ordering field; their array position is the send order,
//! so every operation here preserves positions except the append in
//! [`add_step`].

use crate::model::mail::{MailField, UtmKind, UtmParams};
use crate::model::reduction::{ReductionConfig, ReductionType};
use crate::model::step::{DelayUnit, Step, step_campaign};

/// One edit to a step's own fields.
#[derive(Debug, Clone, PartialEq)]
pub enum StepField {
    Delai(u32),
    DelaiUnite(DelayUnit),
    Mail(MailField),
    Reduction(ReductionField),
}

/// One edit to a reduction config (step-level or entity-level).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReductionField {
    Actif(bool),
    Montant(u32),
    Kind(ReductionType),
    DureeValidite(u32),
}

pub fn apply_reduction_field(config: &mut ReductionConfig, field: ReductionField) {
    match field {
        ReductionField::Actif(actif) => config.actif = actif,
        ReductionField::Montant(montant) => config.montant = montant,
        ReductionField::Kind(kind) => config.kind = kind,
        ReductionField::DureeValidite(duree) => config.duree_validite = duree,
    }
}

/// Appends a new step at the end (highest send order) and returns its id.
pub fn add_step(steps: &mut Vec<Step>) -> String {
    let step = Step::new(steps.len() + 1);
    let id = step.id.clone();
    steps.push(step);
    id
}

/// Removes exactly the step with `id`. Returns `false` when absent.
pub fn remove_step(steps: &mut Vec<Step>, id: &str) -> bool {
    match steps.iter().position(|step| step.id == id) {
        Some(position) => {
            steps.remove(position);
            true
        }
        None => false,
    }
}

/// Replaces one field of the step with `id`; every other field and every
/// step's position stay as they were. Returns `false` when absent.
///
/// Editing a reduction field on a step without a reduction starts one from
/// the defaults first.
pub fn update_step(steps: &mut [Step], id: &str, field: StepField) -> bool {
    let Some(step) = steps.iter_mut().find(|step| step.id == id) else {
        return false;
    };
    match field {
        StepField::Delai(delai) => step.delai = delai,
        StepField::DelaiUnite(unit) => step.delai_unite = unit,
        StepField::Mail(mail_field) => step.mail.apply(mail_field),
        StepField::Reduction(reduction_field) => {
            let reduction = step.reduction.get_or_insert_with(ReductionConfig::default);
            apply_reduction_field(reduction, reduction_field);
        }
    }
    true
}

/// Bulk-resets the five banner- or button-UTM fields of the step with `id`
/// to its position-derived defaults. Returns `false` when absent.
pub fn reset_step_utm(steps: &mut [Step], id: &str, kind: UtmKind) -> bool {
    let Some(position) = steps.iter().position(|step| step.id == id) else {
        return false;
    };
    let campaign = step_campaign(position + 1);
    *steps[position].mail.utm_mut(kind) = UtmParams::defaults(kind, &campaign);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mail::{MailTextField, UtmField};

    fn two_steps() -> Vec<Step> {
        let mut steps = Vec::new();
        add_step(&mut steps);
        add_step(&mut steps);
        steps
    }

    #[test]
    fn add_then_remove_round_trips_the_list() {
        let mut steps = two_steps();
        let before = steps.clone();

        let id = add_step(&mut steps);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().map(|s| s.id.as_str()), Some(id.as_str()));

        assert!(remove_step(&mut steps, &id));
        assert_eq!(steps, before);
    }

    #[test]
    fn new_steps_always_append_at_the_end() {
        let mut steps = Vec::new();
        for expected in 1..=4 {
            let id = add_step(&mut steps);
            assert_eq!(steps.last().map(|s| s.id.as_str()), Some(id.as_str()));
            assert_eq!(
                steps.last().map(|s| s.mail.banner_utm.campaign.clone()),
                Some(format!("cart_recovery_step{expected}"))
            );
        }
    }

    #[test]
    fn update_changes_only_the_targeted_field() {
        let mut steps = two_steps();
        let before = steps.clone();
        let target = steps[1].id.clone();

        assert!(update_step(
            &mut steps,
            &target,
            StepField::Mail(MailField::Text(
                MailTextField::SujetMail,
                "Come back!".to_string(),
            )),
        ));

        // Untouched sibling is bit-for-bit identical.
        assert_eq!(steps[0], before[0]);
        assert_eq!(steps[1].mail.sujet_mail, "Come back!");
        let mut reverted = steps[1].clone();
        reverted.mail.sujet_mail = before[1].mail.sujet_mail.clone();
        assert_eq!(reverted, before[1]);
    }

    #[test]
    fn update_missing_step_is_a_noop() {
        let mut steps = two_steps();
        let before = steps.clone();
        assert!(!update_step(&mut steps, "ghost", StepField::Delai(9)));
        assert_eq!(steps, before);
    }

    #[test]
    fn reduction_edit_starts_from_defaults_when_absent() {
        let mut steps = two_steps();
        let target = steps[0].id.clone();
        assert!(steps[0].reduction.is_none());

        update_step(
            &mut steps,
            &target,
            StepField::Reduction(ReductionField::Actif(true)),
        );
        let reduction = steps[0].reduction.as_ref().unwrap();
        assert!(reduction.actif);
        assert_eq!(reduction.montant, ReductionConfig::default().montant);
    }

    #[test]
    fn utm_reset_restores_position_derived_defaults() {
        let mut steps = two_steps();
        let target = steps[1].id.clone();
        update_step(
            &mut steps,
            &target,
            StepField::Mail(MailField::Utm(
                UtmKind::Button,
                UtmField::Campaign,
                "custom".to_string(),
            )),
        );
        assert_eq!(steps[1].mail.button_utm.campaign, "custom");

        assert!(reset_step_utm(&mut steps, &target, UtmKind::Button));
        assert_eq!(
            steps[1].mail.button_utm,
            UtmParams::defaults(UtmKind::Button, "cart_recovery_step2")
        );
        // Banner UTMs are untouched by a button reset.
        assert_eq!(steps[1].mail.banner_utm.campaign, "cart_recovery_step2");
    }
}
