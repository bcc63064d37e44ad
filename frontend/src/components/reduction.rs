//! Discount configuration sub-form.
//!
//! Pure controlled component: no internal state, four values in, four
//! change callbacks out. Numeric input is filtered through
//! `parse_positive_int`, so zero, negative or non-numeric text never
//! reaches the model. Everything except the enable checkbox is disabled
//! while the discount is off.

use common::model::reduction::ReductionType;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::forms::positive_int_callback;

#[derive(Properties, PartialEq)]
pub struct ReductionEditorProps {
    pub actif: bool,
    pub montant: u32,
    pub kind: ReductionType,
    pub duree: u32,
    pub on_actif_change: Callback<bool>,
    pub on_montant_change: Callback<u32>,
    pub on_type_change: Callback<ReductionType>,
    pub on_duree_change: Callback<u32>,
}

pub struct ReductionConfigEditor;

impl Component for ReductionConfigEditor {
    type Message = ();
    type Properties = ReductionEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReductionConfigEditor
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let disabled = !props.actif;

        let on_actif = {
            let cb = props.on_actif_change.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                cb.emit(input.checked());
            })
        };
        let on_montant = positive_int_callback(props.on_montant_change.clone(), "discount amount");
        let on_duree = positive_int_callback(props.on_duree_change.clone(), "validity duration");
        let on_kind = {
            let cb = props.on_type_change.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                if let Some(kind) = ReductionType::parse_label(&select.value()) {
                    cb.emit(kind);
                }
            })
        };

        html! {
            <fieldset class="reduction-editor">
                <legend>{"Discount"}</legend>
                <label class="field-inline">
                    <input type="checkbox" checked={props.actif} onchange={on_actif} />
                    {"Offer a discount"}
                </label>
                <label class="field">
                    {"Amount"}
                    <input
                        type="number"
                        min="1"
                        value={props.montant.to_string()}
                        disabled={disabled}
                        oninput={on_montant}
                    />
                </label>
                <label class="field">
                    {"Type"}
                    <select value={props.kind.label()} disabled={disabled} onchange={on_kind}>
                        <option value={ReductionType::Percentage.label()} selected={props.kind == ReductionType::Percentage}>
                            {"Percentage (%)"}
                        </option>
                        <option value={ReductionType::FixedAmount.label()} selected={props.kind == ReductionType::FixedAmount}>
                            {"Fixed amount (€)"}
                        </option>
                    </select>
                </label>
                <label class="field">
                    {"Valid for (days)"}
                    <input
                        type="number"
                        min="1"
                        value={props.duree.to_string()}
                        disabled={disabled}
                        oninput={on_duree}
                    />
                </label>
            </fieldset>
        }
    }
}
