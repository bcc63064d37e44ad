//! Newsletters section: filterable list, read-only detail, aggregate
//! statistics and the create/edit form. Smaller sibling of the scenarios
//! container, without the step machinery.

use chrono::NaiveDate;
use common::model::mail::MailTextField;
use common::model::newsletter::Newsletter;
use common::model::site::Site;
use common::model::stats::EntityStats;
use common::preview::MailPreviewData;
use common::store::{CollectionStore, DeleteConfirmation, Entity, ListFilter, StoreAction, StoreError};
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::editor::NewsletterEditor;
use crate::components::confirm::ConfirmDialog;
use crate::components::preview::MailPreview;
use crate::components::site_select::SiteSelect;
use crate::components::stats::stats_panel;
use crate::demo;
use crate::toast::show_toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Liste,
    Creation,
    Detail,
    Statistiques,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Liste, Tab::Creation, Tab::Detail, Tab::Statistiques];

    fn label(self) -> &'static str {
        match self {
            Tab::Liste => "List",
            Tab::Creation => "Create",
            Tab::Detail => "Detail",
            Tab::Statistiques => "Statistics",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NewslettersProps {
    pub sites: Vec<Site>,
}

pub enum Msg {
    SetTab(Tab),
    ShowDetail(String),
    NewNewsletter,
    EditNewsletter(String),
    Submit(Newsletter),
    CancelEdit,
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    ToggleActif(String),
    SetSiteFilter(Option<String>),
    SetDateFrom(Option<NaiveDate>),
    SetDateTo(Option<NaiveDate>),
    ResetFilters,
    OpenPreview(String),
    SetPreviewOpen(bool),
}

pub struct NewslettersContainer {
    store: CollectionStore<Newsletter>,
    tab: Tab,
    selected_id: Option<String>,
    editing_id: Option<String>,
    filter: ListFilter,
    delete_confirm: DeleteConfirmation,
    preview_for: Option<String>,
}

impl Component for NewslettersContainer {
    type Message = Msg;
    type Properties = NewslettersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            store: CollectionStore::from_items(demo::seed_newsletters()),
            tab: Tab::Liste,
            selected_id: None,
            editing_id: None,
            filter: ListFilter::default(),
            delete_confirm: DeleteConfirmation::new(),
            preview_for: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.tab = tab;
                if tab != Tab::Creation {
                    self.editing_id = None;
                }
            }
            Msg::ShowDetail(id) => {
                self.selected_id = Some(id);
                self.tab = Tab::Detail;
            }
            Msg::NewNewsletter => {
                self.editing_id = None;
                self.tab = Tab::Creation;
            }
            Msg::EditNewsletter(id) => {
                self.editing_id = Some(id);
                self.tab = Tab::Creation;
            }
            Msg::Submit(newsletter) => {
                let name = newsletter.label().to_string();
                let action = if self.store.contains(&newsletter.id) {
                    StoreAction::Replace(newsletter)
                } else {
                    StoreAction::Add(newsletter)
                };
                let created = matches!(action, StoreAction::Add(_));
                match self.store.apply(action) {
                    Ok(()) if created => {
                        show_toast("Newsletter created", &format!("\"{name}\" has been added."));
                    }
                    Ok(()) => {
                        show_toast("Newsletter updated", &format!("\"{name}\" has been saved."));
                    }
                    Err(err) => report_store_error("save newsletter", &err),
                }
                self.editing_id = None;
                self.tab = Tab::Liste;
            }
            Msg::CancelEdit => {
                self.editing_id = None;
                self.tab = Tab::Liste;
            }
            Msg::RequestDelete(id) => {
                self.delete_confirm.request(&id);
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.delete_confirm.take_confirmed() else {
                    return false;
                };
                let name = self
                    .store
                    .get(&id)
                    .map(|n| n.label().to_string())
                    .unwrap_or_else(|| id.clone());
                match self.store.apply(StoreAction::Remove(id.clone())) {
                    Ok(()) => {
                        show_toast(
                            "Newsletter deleted",
                            &format!("\"{name}\" has been removed."),
                        );
                        if self.selected_id.as_deref() == Some(id.as_str()) {
                            self.selected_id = None;
                        }
                        if self.preview_for.as_deref() == Some(id.as_str()) {
                            self.preview_for = None;
                        }
                    }
                    Err(err) => report_store_error("delete newsletter", &err),
                }
            }
            Msg::CancelDelete => {
                self.delete_confirm.cancel();
            }
            Msg::ToggleActif(id) => {
                match self.store.apply(StoreAction::ToggleActif(id.clone())) {
                    Ok(()) => {
                        if let Some(newsletter) = self.store.get(&id) {
                            let state = if newsletter.actif() { "enabled" } else { "disabled" };
                            show_toast(
                                "Newsletter updated",
                                &format!("\"{}\" is now {state}.", newsletter.label()),
                            );
                        }
                    }
                    Err(err) => report_store_error("toggle newsletter", &err),
                }
            }
            Msg::SetSiteFilter(site_id) => self.filter.site_id = site_id,
            Msg::SetDateFrom(date) => self.filter.date_range.from = date,
            Msg::SetDateTo(date) => self.filter.date_range.to = date,
            Msg::ResetFilters => self.filter.reset(),
            Msg::OpenPreview(id) => self.preview_for = Some(id),
            Msg::SetPreviewOpen(open) => {
                if !open {
                    self.preview_for = None;
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="newsletters-container">
                <div class="tab-bar">
                    {
                        for Tab::ALL.iter().map(|tab| {
                            let tab = *tab;
                            html! {
                                <button
                                    class={classes!("tab-btn", (self.tab == tab).then_some("active"))}
                                    onclick={link.callback(move |_| {
                                        if tab == Tab::Creation { Msg::NewNewsletter } else { Msg::SetTab(tab) }
                                    })}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                </div>
                {
                    match self.tab {
                        Tab::Liste => self.view_list(ctx),
                        Tab::Creation => self.view_creation(ctx),
                        Tab::Detail => self.view_detail(),
                        Tab::Statistiques => self.view_stats(),
                    }
                }
                <ConfirmDialog
                    open={self.delete_confirm.is_open()}
                    message="Delete this newsletter? This cannot be undone."
                    on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                    on_cancel={link.callback(|_| Msg::CancelDelete)}
                />
                <MailPreview
                    open={self.preview_for.is_some()}
                    data={self.preview_data()}
                    on_open_change={link.callback(Msg::SetPreviewOpen)}
                />
            </div>
        }
    }
}

fn date_change(e: Event) -> Option<NaiveDate> {
    let input: HtmlInputElement = e.target_unchecked_into();
    NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok()
}

fn report_store_error(what: &str, err: &StoreError) {
    error!(format!("failed to {what}: {err}"));
    show_toast("Action failed", &err.to_string());
}

impl NewslettersContainer {
    fn selected(&self) -> Option<&Newsletter> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    fn preview_data(&self) -> MailPreviewData {
        self.preview_for
            .as_deref()
            .and_then(|id| self.store.get(id))
            .map(|newsletter| MailPreviewData::from_bundle(&newsletter.mail))
            .unwrap_or_default()
    }

    fn view_list(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self.filter.apply(self.store.items());
        let from = self
            .filter
            .date_range
            .from
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let to = self
            .filter
            .date_range
            .to
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        html! {
            <div class="list-tab">
                <div class="filter-bar" style="display:flex;gap:8px;align-items:center;margin:12px 0;">
                    <SiteSelect
                        sites={ctx.props().sites.clone()}
                        selected={self.filter.site_id.clone()}
                        empty_label="All sites"
                        on_change={link.callback(Msg::SetSiteFilter)}
                    />
                    <label class="field-inline">
                        {"From"}
                        <input type="date" value={from} onchange={link.callback(|e| Msg::SetDateFrom(date_change(e)))} />
                    </label>
                    <label class="field-inline">
                        {"To"}
                        <input type="date" value={to} onchange={link.callback(|e| Msg::SetDateTo(date_change(e)))} />
                    </label>
                    {
                        if self.filter.is_active() {
                            html! {
                                <button class="btn" onclick={link.callback(|_| Msg::ResetFilters)}>
                                    {"Reset filters"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if visible.is_empty() {
                        html! {
                            <p class="empty-state">
                                { if self.store.is_empty() {
                                    "No newsletters yet. Use the Create tab to add one."
                                } else {
                                    "No newsletter matches the current filters."
                                } }
                            </p>
                        }
                    } else {
                        html! {
                            <table class="entity-table" style="width:100%;border-collapse:collapse;">
                                <thead>
                                    <tr>
                                        <th>{"Name"}</th>
                                        <th>{"Site"}</th>
                                        <th>{"Created"}</th>
                                        <th>{"Last sent"}</th>
                                        <th>{"Next send"}</th>
                                        <th>{"Active"}</th>
                                        <th>{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for visible.iter().map(|newsletter| view_row(newsletter, link)) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </div>
        }
    }

    fn view_creation(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let editing = self.editing_id.as_deref().and_then(|id| self.store.get(id));
        html! {
            <NewsletterEditor
                newsletter={editing.cloned()}
                sites={ctx.props().sites.clone()}
                on_submit={link.callback(Msg::Submit)}
                on_cancel={link.callback(|_| Msg::CancelEdit)}
            />
        }
    }

    fn view_detail(&self) -> Html {
        let Some(newsletter) = self.selected() else {
            return html! {
                <p class="empty-state">
                    {"Select a newsletter from the list to see its details."}
                </p>
            };
        };

        html! {
            <div class="detail-tab">
                <h2>{ newsletter.nom.clone() }</h2>
                <dl class="detail-list">
                    <dt>{"Site"}</dt>
                    <dd>{ newsletter.site_name.clone() }</dd>
                    <dt>{"Created"}</dt>
                    <dd>{ newsletter.date_creation.format("%Y-%m-%d %H:%M").to_string() }</dd>
                    <dt>{"Active"}</dt>
                    <dd>{ if newsletter.actif { "Yes" } else { "No" } }</dd>
                    <dt>{"Audience"}</dt>
                    <dd>{ if newsletter.criteria.subscribed { "Subscribed contacts only" } else { "All contacts" } }</dd>
                    <dt>{"Last sent"}</dt>
                    <dd>{ format_send_date(newsletter.last_sent) }</dd>
                    <dt>{"Next send"}</dt>
                    <dd>{ format_send_date(newsletter.next_send) }</dd>
                    {
                        for MailTextField::ALL.iter().map(|field| html! {
                            <>
                                <dt>{ field.label() }</dt>
                                <dd>{ field.get(&newsletter.mail).to_string() }</dd>
                            </>
                        })
                    }
                    {
                        match &newsletter.reduction {
                            Some(reduction) if reduction.actif => html! {
                                <>
                                    <dt>{"Discount"}</dt>
                                    <dd>{ reduction.summary() }</dd>
                                </>
                            },
                            _ => html! {},
                        }
                    }
                </dl>
            </div>
        }
    }

    fn view_stats(&self) -> Html {
        let visible = self.filter.apply(self.store.items());
        let total = visible
            .iter()
            .fold(EntityStats::zero(), |acc, newsletter| {
                acc.merged(&newsletter.stats)
            });

        html! {
            <div class="stats-tab">
                { stats_panel("Newsletters — all", &total) }
                {
                    for visible.iter().map(|newsletter| {
                        stats_panel(&newsletter.nom, &newsletter.stats)
                    })
                }
            </div>
        }
    }
}

fn format_send_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "—".to_string(),
    }
}

fn view_row(newsletter: &Newsletter, link: &Scope<NewslettersContainer>) -> Html {
    let id = newsletter.id.clone();
    let detail = {
        let id = id.clone();
        link.callback(move |_| Msg::ShowDetail(id.clone()))
    };
    let edit = {
        let id = id.clone();
        link.callback(move |_| Msg::EditNewsletter(id.clone()))
    };
    let preview = {
        let id = id.clone();
        link.callback(move |_| Msg::OpenPreview(id.clone()))
    };
    let toggle = {
        let id = id.clone();
        link.callback(move |_| Msg::ToggleActif(id.clone()))
    };
    let delete = link.callback(move |_| Msg::RequestDelete(id.clone()));

    html! {
        <tr>
            <td>{ newsletter.nom.clone() }</td>
            <td>{ newsletter.site_name.clone() }</td>
            <td>{ newsletter.date_creation.format("%Y-%m-%d").to_string() }</td>
            <td>{ format_send_date(newsletter.last_sent) }</td>
            <td>{ format_send_date(newsletter.next_send) }</td>
            <td>
                <button class="btn btn-small" onclick={toggle}>
                    { if newsletter.actif { "On" } else { "Off" } }
                </button>
            </td>
            <td style="display:flex;gap:4px;">
                <button class="btn btn-small" onclick={detail}>{"Detail"}</button>
                <button class="btn btn-small" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-small" onclick={preview}>{"Preview"}</button>
                <button class="btn btn-small btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
