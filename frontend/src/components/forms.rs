//! Shared form building blocks: event value extraction, the mail content
//! bundle form generated from the field schema in `common`, and the
//! discount sub-form wiring. Used by both the scenario and newsletter
//! editors.

use common::editor::fields::{ValidationError, error_for, parse_positive_int};
use common::editor::steps::ReductionField;
use common::model::mail::{MailContentBundle, MailField, MailTextField, UtmField, UtmKind, UtmParams};
use common::model::reduction::ReductionConfig;
use gloo_console::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reduction::ReductionConfigEditor;

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

pub fn checkbox_checked(e: &Event) -> bool {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.checked()
}

/// Drops anything that is not an integer >= 1 at the input boundary.
pub fn positive_int_callback(cb: Callback<u32>, what: &'static str) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| match parse_positive_int(&input_value(&e)) {
        Some(value) => cb.emit(value),
        None => warn!(format!("rejected {what} input")),
    })
}

/// Inline error text for one field, or nothing.
pub fn error_hint(error: Option<&ValidationError>) -> Html {
    match error {
        Some(error) => html! { <span class="field-error">{ error.message.clone() }</span> },
        None => html! {},
    }
}

/// Full edit form for one mail content bundle: the nine text fields plus
/// both UTM sets. `prefix` scopes the validation error lookups.
pub fn build_mail_bundle_form(
    prefix: &str,
    bundle: &MailContentBundle,
    errors: &[ValidationError],
    on_edit: Callback<MailField>,
    on_reset_utm: Callback<UtmKind>,
) -> Html {
    html! {
        <div class="mail-form">
            {
                for MailTextField::ALL.iter().map(|field| {
                    let field = *field;
                    let error = error_for(errors, &format!("{prefix}{}", field.name()));
                    let on_edit = on_edit.clone();
                    let control = if field.is_body() {
                        let oninput = Callback::from(move |e: InputEvent| {
                            on_edit.emit(MailField::Text(field, textarea_value(&e)));
                        });
                        html! {
                            <textarea rows="4" value={field.get(bundle).to_string()} {oninput} />
                        }
                    } else {
                        let oninput = Callback::from(move |e: InputEvent| {
                            on_edit.emit(MailField::Text(field, input_value(&e)));
                        });
                        let kind = if field.is_url() { "url" } else { "text" };
                        html! {
                            <input type={kind} value={field.get(bundle).to_string()} {oninput} />
                        }
                    };
                    html! {
                        <label class="field">
                            { field.label() }
                            { control }
                            { error_hint(error) }
                        </label>
                    }
                })
            }
            { build_utm_fieldset(prefix, UtmKind::Banner, bundle.utm(UtmKind::Banner), errors, on_edit.clone(), on_reset_utm.clone()) }
            { build_utm_fieldset(prefix, UtmKind::Button, bundle.utm(UtmKind::Button), errors, on_edit, on_reset_utm) }
        </div>
    }
}

fn build_utm_fieldset(
    prefix: &str,
    kind: UtmKind,
    params: &UtmParams,
    errors: &[ValidationError],
    on_edit: Callback<MailField>,
    on_reset: Callback<UtmKind>,
) -> Html {
    let reset = Callback::from(move |_: MouseEvent| on_reset.emit(kind));
    html! {
        <fieldset class="utm-form">
            <legend>{ kind.label() }</legend>
            {
                for UtmField::ALL.iter().map(|field| {
                    let field = *field;
                    let error = error_for(
                        errors,
                        &format!("{prefix}{}.{}", kind.wire_name(), field.name()),
                    );
                    let on_edit = on_edit.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        on_edit.emit(MailField::Utm(kind, field, input_value(&e)));
                    });
                    html! {
                        <label class="field">
                            { field.label() }
                            <input type="text" value={field.get(params).to_string()} {oninput} />
                            { error_hint(error) }
                        </label>
                    }
                })
            }
            <button type="button" class="btn btn-small" onclick={reset}>
                {"Reset to defaults"}
            </button>
        </fieldset>
    }
}

/// Discount sub-form bound to one `Callback<ReductionField>`; a missing
/// config renders (and edits start from) the defaults.
pub fn build_reduction_editor(config: ReductionConfig, on_edit: Callback<ReductionField>) -> Html {
    html! {
        <ReductionConfigEditor
            actif={config.actif}
            montant={config.montant}
            kind={config.kind}
            duree={config.duree_validite}
            on_actif_change={on_edit.reform(ReductionField::Actif)}
            on_montant_change={on_edit.reform(ReductionField::Montant)}
            on_type_change={on_edit.reform(ReductionField::Kind)}
            on_duree_change={on_edit.reform(ReductionField::DureeValidite)}
        />
    }
}
