//! Newsletter create/edit form. Same draft discipline and dirty tracking
//! as the scenario editor, without the step machinery.

use chrono::{DateTime, NaiveDate, Utc};
use common::editor::fields::error_for;
use common::editor::newsletter_draft::NewsletterDraft;
use common::model::newsletter::Newsletter;
use common::model::site::Site;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::forms::{
    build_mail_bundle_form, build_reduction_editor, checkbox_checked, error_hint, input_value,
};
use crate::components::site_select::SiteSelect;
use crate::dirty::set_dirty;
use crate::toast::show_toast;

#[derive(Properties, PartialEq)]
pub struct NewsletterEditorProps {
    /// Entity to edit; `None` opens the form in create mode.
    #[prop_or_default]
    pub newsletter: Option<Newsletter>,
    pub sites: Vec<Site>,
    pub on_submit: Callback<Newsletter>,
    pub on_cancel: Callback<()>,
}

pub enum Msg {
    SetNom(String),
    SetSite(Option<String>),
    SetActif(bool),
    SetSubscribed(bool),
    SetNextSend(Option<DateTime<Utc>>),
    EditMail(common::model::mail::MailField),
    ResetMailUtm(common::model::mail::UtmKind),
    EditReduction(common::editor::steps::ReductionField),
    Submit,
    Cancel,
}

pub struct NewsletterEditor {
    draft: NewsletterDraft,
    errors: Vec<common::editor::fields::ValidationError>,
    original_md5: String,
}

fn draft_md5(draft: &NewsletterDraft) -> String {
    let json = serde_json::to_string(draft.newsletter()).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}

impl NewsletterEditor {
    fn from_props(props: &NewsletterEditorProps) -> Self {
        let draft = match &props.newsletter {
            Some(newsletter) => NewsletterDraft::edit(newsletter),
            None => NewsletterDraft::create(),
        };
        let original_md5 = draft_md5(&draft);
        Self {
            draft,
            errors: Vec::new(),
            original_md5,
        }
    }

    fn is_dirty(&self) -> bool {
        draft_md5(&self.draft) != self.original_md5
    }
}

impl Component for NewsletterEditor {
    type Message = Msg;
    type Properties = NewsletterEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        NewsletterEditor::from_props(ctx.props())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().newsletter != old_props.newsletter {
            *self = NewsletterEditor::from_props(ctx.props());
            set_dirty(false);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetNom(nom) => self.draft.set_nom(nom),
            Msg::SetSite(site_id) => {
                let site = site_id
                    .as_deref()
                    .and_then(|id| ctx.props().sites.iter().find(|site| site.id == id));
                self.draft.set_site(site);
            }
            Msg::SetActif(actif) => self.draft.set_actif(actif),
            Msg::SetSubscribed(subscribed) => self.draft.set_subscribed(subscribed),
            Msg::SetNextSend(next_send) => self.draft.set_next_send(next_send),
            Msg::EditMail(field) => self.draft.edit_mail(field),
            Msg::ResetMailUtm(kind) => self.draft.reset_mail_utm(kind),
            Msg::EditReduction(field) => self.draft.edit_reduction(field),
            Msg::Submit => {
                match self.draft.submit() {
                    Ok(newsletter) => {
                        self.errors.clear();
                        self.original_md5 = draft_md5(&self.draft);
                        set_dirty(false);
                        ctx.props().on_submit.emit(newsletter);
                    }
                    Err(errors) => {
                        show_toast(
                            "Cannot save yet",
                            &format!("{} field(s) need attention.", errors.len()),
                        );
                        self.errors = errors;
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
        set_dirty(self.is_dirty());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let newsletter = self.draft.newsletter();
        let selected_site = (!newsletter.site_id.is_empty()).then(|| newsletter.site_id.clone());
        let next_send = newsletter
            .next_send
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        let title = if self.draft.is_new() {
            "New newsletter".to_string()
        } else {
            format!("Edit \"{}\"", newsletter.nom)
        };

        html! {
            <div class="newsletter-editor">
                <h2>
                    { title }
                    {
                        self.is_dirty().then(|| html! {
                            <span class="dirty-dot" title="Unsaved changes">{"●"}</span>
                        })
                    }
                </h2>
                <fieldset class="base-section">
                    <legend>{"General"}</legend>
                    <label class="field">
                        {"Name"}
                        <input
                            type="text"
                            value={newsletter.nom.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetNom(input_value(&e)))}
                        />
                        { error_hint(error_for(&self.errors, "nom")) }
                    </label>
                    <label class="field">
                        {"Site"}
                        <SiteSelect
                            sites={ctx.props().sites.clone()}
                            selected={selected_site}
                            empty_label="Choose a site…"
                            on_change={link.callback(Msg::SetSite)}
                        />
                        { error_hint(error_for(&self.errors, "siteId")) }
                    </label>
                    <label class="field-inline">
                        <input
                            type="checkbox"
                            checked={newsletter.actif}
                            onchange={link.callback(|e: Event| Msg::SetActif(checkbox_checked(&e)))}
                        />
                        {"Active"}
                    </label>
                    <label class="field-inline">
                        <input
                            type="checkbox"
                            checked={newsletter.criteria.subscribed}
                            onchange={link.callback(|e: Event| Msg::SetSubscribed(checkbox_checked(&e)))}
                        />
                        {"Subscribed contacts only"}
                    </label>
                    <label class="field">
                        {"Next send"}
                        <input
                            type="date"
                            value={next_send}
                            onchange={link.callback(|e: Event| Msg::SetNextSend(parse_send_date(&e)))}
                        />
                    </label>
                </fieldset>
                <fieldset class="mail-section">
                    <legend>{"Mail"}</legend>
                    {
                        build_mail_bundle_form(
                            "",
                            &newsletter.mail,
                            &self.errors,
                            link.callback(Msg::EditMail),
                            link.callback(Msg::ResetMailUtm),
                        )
                    }
                </fieldset>
                {
                    build_reduction_editor(
                        newsletter.reduction.clone().unwrap_or_default(),
                        link.callback(Msg::EditReduction),
                    )
                }
                { error_hint(error_for(&self.errors, "reduction.montant")) }
                { error_hint(error_for(&self.errors, "reduction.dureeValidite")) }
                <div class="editor-actions">
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Submit)}>
                        { if self.draft.is_new() { "Create newsletter" } else { "Save changes" } }
                    </button>
                    <button class="btn" onclick={link.callback(|_| Msg::Cancel)}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_dirty(false);
    }
}

/// Empty or malformed input clears the scheduled send.
fn parse_send_date(e: &Event) -> Option<DateTime<Utc>> {
    let input: HtmlInputElement = e.target_unchecked_into();
    NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
