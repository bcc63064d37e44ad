//! View rendering for the scenarios container: tab bar, filterable list,
//! read-only detail, aggregate statistics, and the creation tab hosting
//! the editor. The confirm and preview dialogs are always mounted and
//! driven by container state.

use chrono::NaiveDate;
use common::model::mail::{MailTextField, UtmField};
use common::model::scenario::Scenario;
use common::model::stats::EntityStats;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ContainerTab, ScenariosContainer};
use crate::components::confirm::ConfirmDialog;
use crate::components::preview::MailPreview;
use crate::components::scenarios::editor::ScenarioEditor;
use crate::components::site_select::SiteSelect;
use crate::components::stats::stats_panel;

pub fn view(container: &ScenariosContainer, ctx: &Context<ScenariosContainer>) -> Html {
    let link = ctx.link();
    html! {
        <div class="scenarios-container">
            { build_tab_bar(container, link) }
            {
                match container.tab {
                    ContainerTab::Liste => build_list_tab(container, ctx),
                    ContainerTab::Creation => build_creation_tab(container, ctx),
                    ContainerTab::Detail => build_detail_tab(container),
                    ContainerTab::Statistiques => build_stats_tab(container),
                }
            }
            <ConfirmDialog
                open={container.delete_confirm.is_open()}
                message="Delete this scenario? This cannot be undone."
                on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                on_cancel={link.callback(|_| Msg::CancelDelete)}
            />
            <MailPreview
                open={container.preview_for.is_some()}
                data={container.preview_data()}
                on_open_change={link.callback(Msg::SetPreviewOpen)}
            />
        </div>
    }
}

fn build_tab_bar(container: &ScenariosContainer, link: &Scope<ScenariosContainer>) -> Html {
    const TABS: [ContainerTab; 4] = [
        ContainerTab::Liste,
        ContainerTab::Creation,
        ContainerTab::Detail,
        ContainerTab::Statistiques,
    ];
    html! {
        <div class="tab-bar">
            {
                for TABS.iter().map(|tab| {
                    let tab = *tab;
                    let msg = if tab == ContainerTab::Creation {
                        Msg::NewScenario
                    } else {
                        Msg::SetTab(tab)
                    };
                    html! {
                        <button
                            class={classes!("tab-btn", (container.tab == tab).then_some("active"))}
                            onclick={link.callback(move |_| msg.clone())}
                        >
                            { tab.label() }
                        </button>
                    }
                })
            }
        </div>
    }
}

/// Parses the value of a `<input type="date">` change event; an empty
/// value clears the bound filter.
fn date_change(e: Event) -> Option<NaiveDate> {
    let input: HtmlInputElement = e.target_unchecked_into();
    NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok()
}

fn build_filter_bar(container: &ScenariosContainer, ctx: &Context<ScenariosContainer>) -> Html {
    let link = ctx.link();
    let from = container
        .filter
        .date_range
        .from
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let to = container
        .filter
        .date_range
        .to
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    html! {
        <div class="filter-bar" style="display:flex;gap:8px;align-items:center;margin:12px 0;">
            <SiteSelect
                sites={ctx.props().sites.clone()}
                selected={container.filter.site_id.clone()}
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
                if container.filter.is_active() {
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
    }
}

fn build_list_tab(container: &ScenariosContainer, ctx: &Context<ScenariosContainer>) -> Html {
    let link = ctx.link();
    let visible = container.filter.apply(container.store.items());

    let rows = visible.iter().map(|scenario| build_list_row(scenario, link));
    html! {
        <div class="list-tab">
            { build_filter_bar(container, ctx) }
            {
                if visible.is_empty() {
                    html! {
                        <p class="empty-state">
                            { if container.store.is_empty() {
                                "No scenarios yet. Use the Create tab to add one."
                            } else {
                                "No scenario matches the current filters."
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
                                    <th>{"Steps"}</th>
                                    <th>{"Active"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>{ for rows }</tbody>
                        </table>
                    }
                }
            }
        </div>
    }
}

fn build_list_row(scenario: &Scenario, link: &Scope<ScenariosContainer>) -> Html {
    let id = scenario.id.clone();
    let detail = {
        let id = id.clone();
        link.callback(move |_| Msg::ShowDetail(id.clone()))
    };
    let edit = {
        let id = id.clone();
        link.callback(move |_| Msg::EditScenario(id.clone()))
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
            <td>{ scenario.nom.clone() }</td>
            <td>{ scenario.site_name.clone() }</td>
            <td>{ scenario.date_creation.format("%Y-%m-%d").to_string() }</td>
            <td>{ scenario.etapes.len() }</td>
            <td>
                <button class="btn btn-small" onclick={toggle}>
                    { if scenario.actif { "On" } else { "Off" } }
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

fn build_creation_tab(container: &ScenariosContainer, ctx: &Context<ScenariosContainer>) -> Html {
    let link = ctx.link();
    html! {
        <ScenarioEditor
            kind={container.kind}
            scenario={container.editing().cloned()}
            sites={ctx.props().sites.clone()}
            on_submit={link.callback(Msg::Submit)}
            on_cancel={link.callback(|_| Msg::CancelEdit)}
        />
    }
}

fn build_detail_tab(container: &ScenariosContainer) -> Html {
    // The selection can go stale after a delete: fall back to an
    // informational state instead of failing.
    let Some(scenario) = container.selected() else {
        return html! {
            <p class="empty-state">
                {"Select a scenario from the list to see its details."}
            </p>
        };
    };

    html! {
        <div class="detail-tab">
            <h2>{ scenario.nom.clone() }</h2>
            <dl class="detail-list">
                <dt>{"Site"}</dt>
                <dd>{ scenario.site_name.clone() }</dd>
                <dt>{"Created"}</dt>
                <dd>{ scenario.date_creation.format("%Y-%m-%d %H:%M").to_string() }</dd>
                <dt>{"Active"}</dt>
                <dd>{ if scenario.actif { "Yes" } else { "No" } }</dd>
                <dt>{"Enrollment"}</dt>
                <dd>{ scenario.enrollment_label() }</dd>
                {
                    for MailTextField::ALL.iter().map(|field| html! {
                        <>
                            <dt>{ field.label() }</dt>
                            <dd>{ field.get(&scenario.mail).to_string() }</dd>
                        </>
                    })
                }
                {
                    if let Some(reduction) = &scenario.reduction {
                        if reduction.actif {
                            html! {
                                <>
                                    <dt>{"Discount"}</dt>
                                    <dd>{ reduction.summary() }</dd>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    } else {
                        html! {}
                    }
                }
            </dl>
            {
                if scenario.etapes.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{"Send sequence"}</h3>
                            <ol class="step-schedule">
                                {
                                    for scenario.etapes.iter().enumerate().map(|(index, step)| html! {
                                        <li>
                                            <strong>{ step.mail.sujet_mail.clone() }</strong>
                                            { format!(" — {}", step.schedule_label(index)) }
                                        </li>
                                    })
                                }
                            </ol>
                        </>
                    }
                }
            }
            { build_utm_summary(scenario) }
        </div>
    }
}

fn build_utm_summary(scenario: &Scenario) -> Html {
    html! {
        <details class="utm-summary">
            <summary>{"Tracking parameters"}</summary>
            <table class="entity-table">
                <thead>
                    <tr>
                        <th>{"Field"}</th>
                        <th>{"Banner"}</th>
                        <th>{"Button"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for UtmField::ALL.iter().map(|field| html! {
                            <tr>
                                <td>{ field.label() }</td>
                                <td>{ field.get(&scenario.mail.banner_utm).to_string() }</td>
                                <td>{ field.get(&scenario.mail.button_utm).to_string() }</td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </details>
    }
}

fn build_stats_tab(container: &ScenariosContainer) -> Html {
    let visible = container.filter.apply(container.store.items());
    let total = visible
        .iter()
        .fold(EntityStats::zero(), |acc, scenario| {
            acc.merged(&scenario.statistiques)
        });

    html! {
        <div class="stats-tab">
            { stats_panel(&format!("{} — all scenarios", container.kind.label()), &total) }
            {
                for visible.iter().map(|scenario| {
                    stats_panel(&scenario.nom, &scenario.statistiques)
                })
            }
        </div>
    }
}
