//! Update function for the scenario editor.
//!
//! Every edit goes through the draft in `common`; this layer only routes
//! messages, keeps the window dirty flag in sync and hands the validated
//! entity to the parent on submit.

use gloo_console::warn;
use yew::prelude::*;

use super::helpers::draft_md5;
use super::messages::Msg;
use super::state::ScenarioEditor;
use crate::dirty::set_dirty;
use crate::toast::show_toast;

pub fn update(editor: &mut ScenarioEditor, ctx: &Context<ScenarioEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetNom(nom) => {
            editor.draft.set_nom(nom);
        }
        Msg::SetSite(site_id) => {
            let site = site_id
                .as_deref()
                .and_then(|id| ctx.props().sites.iter().find(|site| site.id == id));
            editor.draft.set_site(site);
        }
        Msg::SetActif(actif) => {
            editor.draft.set_actif(actif);
        }
        Msg::EditMail(field) => {
            editor.draft.edit_mail(field);
        }
        Msg::ResetMailUtm(kind) => {
            editor.draft.reset_mail_utm(kind);
        }
        Msg::EditCriteria(field) => {
            editor.draft.edit_criteria(field);
        }
        Msg::EditReduction(field) => {
            editor.draft.edit_reduction(field);
        }
        Msg::AddStep => {
            if editor.draft.add_step().is_none() {
                warn!("steps are only available for cart-recovery scenarios");
            }
        }
        Msg::RemoveStep(id) => {
            if !editor.draft.remove_step(&id) {
                warn!(format!("remove_step: no step with id {id}"));
            }
        }
        Msg::UpdateStep(id, field) => {
            if !editor.draft.update_step(&id, field) {
                warn!(format!("update_step: no step with id {id}"));
            }
        }
        Msg::ResetStepUtm(id, kind) => {
            if !editor.draft.reset_step_utm(&id, kind) {
                warn!(format!("reset_step_utm: no step with id {id}"));
            }
        }
        Msg::Submit => {
            match editor.draft.submit() {
                Ok(scenario) => {
                    editor.errors.clear();
                    editor.original_md5 = draft_md5(&editor.draft);
                    set_dirty(false);
                    ctx.props().on_submit.emit(scenario);
                }
                Err(errors) => {
                    show_toast(
                        "Cannot save yet",
                        &format!("{} field(s) need attention.", errors.len()),
                    );
                    editor.errors = errors;
                }
            }
            return true;
        }
        Msg::Cancel => {
            set_dirty(false);
            ctx.props().on_cancel.emit(());
            return true;
        }
    }
    set_dirty(editor.is_dirty());
    true
}
