//! Form rendering for the scenario editor. The mail and UTM sections are
//! generated from the field schema in `common`, so the edit form and the
//! read-only detail view can never drift apart.

use common::editor::fields::error_for;
use common::editor::scenario_draft::CriteriaField;
use common::editor::steps::StepField;
use common::model::scenario::{ScenarioCriteria, ScenarioKind};
use common::model::step::{DelayUnit, Step};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ScenarioEditor;
use crate::components::forms::{
    build_mail_bundle_form, build_reduction_editor, checkbox_checked, error_hint, input_value,
    positive_int_callback,
};
use crate::components::site_select::SiteSelect;

pub fn view(editor: &ScenarioEditor, ctx: &Context<ScenarioEditor>) -> Html {
    let link = ctx.link();
    let scenario = editor.draft.scenario();
    let kind = editor.draft.kind();

    let title = if editor.draft.is_new() {
        format!("New {} scenario", kind.label().to_lowercase())
    } else {
        format!("Edit \"{}\"", scenario.nom)
    };

    html! {
        <div class="scenario-editor">
            <h2>
                { title }
                {
                    editor.is_dirty().then(|| html! {
                        <span class="dirty-dot" title="Unsaved changes">{"●"}</span>
                    })
                }
            </h2>
            { build_base_section(editor, ctx) }
            { build_criteria_section(editor, ctx) }
            <fieldset class="mail-section">
                <legend>{"Main mail"}</legend>
                {
                    build_mail_bundle_form(
                        "",
                        &scenario.mail,
                        &editor.errors,
                        link.callback(Msg::EditMail),
                        link.callback(Msg::ResetMailUtm),
                    )
                }
            </fieldset>
            {
                build_reduction_editor(
                    scenario.reduction.clone().unwrap_or_default(),
                    link.callback(Msg::EditReduction),
                )
            }
            { error_hint(error_for(&editor.errors, "reduction.montant")) }
            { error_hint(error_for(&editor.errors, "reduction.dureeValidite")) }
            {
                if kind == ScenarioKind::CartRecovery {
                    build_steps_section(editor, ctx)
                } else {
                    html! {}
                }
            }
            <div class="editor-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit)}>
                    { if editor.draft.is_new() { "Create scenario" } else { "Save changes" } }
                </button>
                <button class="btn" onclick={link.callback(|_| Msg::Cancel)}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}

fn build_base_section(editor: &ScenarioEditor, ctx: &Context<ScenarioEditor>) -> Html {
    let link = ctx.link();
    let scenario = editor.draft.scenario();
    let selected_site = (!scenario.site_id.is_empty()).then(|| scenario.site_id.clone());

    html! {
        <fieldset class="base-section">
            <legend>{"General"}</legend>
            <label class="field">
                {"Name"}
                <input
                    type="text"
                    value={scenario.nom.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetNom(input_value(&e)))}
                />
                { error_hint(error_for(&editor.errors, "nom")) }
            </label>
            <label class="field">
                {"Site"}
                <SiteSelect
                    sites={ctx.props().sites.clone()}
                    selected={selected_site}
                    empty_label="Choose a site…"
                    on_change={link.callback(Msg::SetSite)}
                />
                { error_hint(error_for(&editor.errors, "siteId")) }
            </label>
            <label class="field-inline">
                <input
                    type="checkbox"
                    checked={scenario.actif}
                    onchange={link.callback(|e: Event| Msg::SetActif(checkbox_checked(&e)))}
                />
                {"Active"}
            </label>
        </fieldset>
    }
}

fn build_criteria_section(editor: &ScenarioEditor, ctx: &Context<ScenarioEditor>) -> Html {
    let link = ctx.link();
    match &editor.draft.scenario().criteres {
        ScenarioCriteria::CartRecovery(criteria) => {
            let on_delai = positive_int_callback(
                link.callback(|v| Msg::EditCriteria(CriteriaField::DelaiCreation(v))),
                "cart age delay",
            );
            html! {
                <fieldset class="criteria-section">
                    <legend>{"Enrollment"}</legend>
                    <label class="field">
                        {"Cart abandoned for at least"}
                        <input
                            type="number"
                            min="1"
                            value={criteria.delai_creation.to_string()}
                            oninput={on_delai}
                        />
                        {
                            build_delay_unit_select(
                                criteria.delai_creation_unite,
                                link.callback(|u| Msg::EditCriteria(CriteriaField::DelaiCreationUnite(u))),
                            )
                        }
                        { error_hint(error_for(&editor.errors, "criteres.delaiCreation")) }
                    </label>
                    <label class="field-inline">
                        <input
                            type="checkbox"
                            checked={criteria.panier_traite}
                            onchange={link.callback(|e: Event| {
                                Msg::EditCriteria(CriteriaField::PanierTraite(checkbox_checked(&e)))
                            })}
                        />
                        {"Include already-processed carts"}
                    </label>
                </fieldset>
            }
        }
        ScenarioCriteria::Birthday(criteria) => {
            let on_jours = positive_int_callback(
                link.callback(|v| Msg::EditCriteria(CriteriaField::JoursValidite(v))),
                "offer validity",
            );
            html! {
                <fieldset class="criteria-section">
                    <legend>{"Enrollment"}</legend>
                    <label class="field">
                        {"Special offer code"}
                        <input
                            type="text"
                            value={criteria.offre_speciale.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::EditCriteria(CriteriaField::OffreSpeciale(input_value(&e)))
                            })}
                        />
                    </label>
                    <label class="field">
                        {"Offer valid for (days)"}
                        <input
                            type="number"
                            min="1"
                            value={criteria.jours_validite.to_string()}
                            oninput={on_jours}
                        />
                        { error_hint(error_for(&editor.errors, "criteres.joursValidite")) }
                    </label>
                </fieldset>
            }
        }
    }
}

fn build_steps_section(editor: &ScenarioEditor, ctx: &Context<ScenarioEditor>) -> Html {
    let link = ctx.link();
    let steps = &editor.draft.scenario().etapes;

    html! {
        <div class="steps-section">
            <h3>{"Follow-up steps"}</h3>
            {
                for steps
                    .iter()
                    .enumerate()
                    .map(|(index, step)| build_step_card(editor, ctx, index, step))
            }
            <button class="btn" onclick={link.callback(|_| Msg::AddStep)}>
                {"Add a step"}
            </button>
        </div>
    }
}

fn build_step_card(
    editor: &ScenarioEditor,
    ctx: &Context<ScenarioEditor>,
    index: usize,
    step: &Step,
) -> Html {
    let link = ctx.link();
    let id = step.id.clone();
    let prefix = format!("etapes[{index}].");

    let on_delai = positive_int_callback(
        {
            let id = id.clone();
            link.callback(move |v| Msg::UpdateStep(id.clone(), StepField::Delai(v)))
        },
        "step delay",
    );
    let on_unit = {
        let id = id.clone();
        link.callback(move |u| Msg::UpdateStep(id.clone(), StepField::DelaiUnite(u)))
    };
    let on_mail = {
        let id = id.clone();
        link.callback(move |f| Msg::UpdateStep(id.clone(), StepField::Mail(f)))
    };
    let on_reset_utm = {
        let id = id.clone();
        link.callback(move |kind| Msg::ResetStepUtm(id.clone(), kind))
    };
    let on_reduction = {
        let id = id.clone();
        link.callback(move |f| Msg::UpdateStep(id.clone(), StepField::Reduction(f)))
    };
    let on_remove = link.callback(move |_| Msg::RemoveStep(id.clone()));

    html! {
        <fieldset class="step-card">
            <legend>
                { format!("Step {} — {}", index + 1, step.schedule_label(index)) }
            </legend>
            <label class="field">
                {"Send after"}
                <input
                    type="number"
                    min="1"
                    value={step.delai.to_string()}
                    oninput={on_delai}
                />
                { build_delay_unit_select(step.delai_unite, on_unit) }
                { error_hint(error_for(&editor.errors, &format!("{prefix}delai"))) }
            </label>
            { build_mail_bundle_form(&prefix, &step.mail, &editor.errors, on_mail, on_reset_utm) }
            {
                build_reduction_editor(
                    step.reduction.clone().unwrap_or_default(),
                    on_reduction,
                )
            }
            { error_hint(error_for(&editor.errors, &format!("{prefix}montant"))) }
            { error_hint(error_for(&editor.errors, &format!("{prefix}dureeValidite"))) }
            <button class="btn btn-small btn-danger" onclick={on_remove}>
                {"Remove this step"}
            </button>
        </fieldset>
    }
}

fn build_delay_unit_select(value: DelayUnit, on_change: Callback<DelayUnit>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let unit = if select.value() == DelayUnit::Days.label() {
            DelayUnit::Days
        } else {
            DelayUnit::Hours
        };
        on_change.emit(unit);
    });
    html! {
        <select {onchange}>
            <option value={DelayUnit::Hours.label()} selected={value == DelayUnit::Hours}>
                {"Hours"}
            </option>
            <option value={DelayUnit::Days.label()} selected={value == DelayUnit::Days}>
                {"Days"}
            </option>
        </select>
    }
}
