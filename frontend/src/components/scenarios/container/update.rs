//! Update function for the scenarios container.
//!
//! All mutation of the collection goes through `CollectionStore::apply`;
//! store errors are logged and toasted, never panicked on. Returns `true`
//! when the view should re-render.

use common::store::{Entity, StoreAction, StoreError};
use gloo_console::error;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ContainerTab, ScenariosContainer};
use crate::toast::show_toast;

pub fn update(
    container: &mut ScenariosContainer,
    _ctx: &Context<ScenariosContainer>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            container.tab = tab;
            if tab != ContainerTab::Creation {
                container.editing_id = None;
            }
            true
        }
        Msg::ShowDetail(id) => {
            container.selected_id = Some(id);
            container.tab = ContainerTab::Detail;
            true
        }
        Msg::NewScenario => {
            container.editing_id = None;
            container.tab = ContainerTab::Creation;
            true
        }
        Msg::EditScenario(id) => {
            container.editing_id = Some(id);
            container.tab = ContainerTab::Creation;
            true
        }
        Msg::Submit(scenario) => {
            let name = scenario.label().to_string();
            let action = if container.store.contains(&scenario.id) {
                StoreAction::Replace(scenario)
            } else {
                StoreAction::Add(scenario)
            };
            let created = matches!(action, StoreAction::Add(_));
            match container.store.apply(action) {
                Ok(()) if created => {
                    show_toast("Scenario created", &format!("\"{name}\" has been added."));
                }
                Ok(()) => {
                    show_toast("Scenario updated", &format!("\"{name}\" has been saved."));
                }
                Err(err) => report_store_error("save scenario", &err),
            }
            container.editing_id = None;
            container.tab = ContainerTab::Liste;
            true
        }
        Msg::CancelEdit => {
            container.editing_id = None;
            container.tab = ContainerTab::Liste;
            true
        }
        Msg::RequestDelete(id) => {
            container.delete_confirm.request(&id);
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = container.delete_confirm.take_confirmed() else {
                return false;
            };
            let name = container
                .store
                .get(&id)
                .map(|s| s.label().to_string())
                .unwrap_or_else(|| id.clone());
            match container.store.apply(StoreAction::Remove(id.clone())) {
                Ok(()) => {
                    show_toast("Scenario deleted", &format!("\"{name}\" has been removed."));
                    // Drop stale references to the removed entity.
                    if container.selected_id.as_deref() == Some(id.as_str()) {
                        container.selected_id = None;
                    }
                    if container.preview_for.as_deref() == Some(id.as_str()) {
                        container.preview_for = None;
                    }
                }
                Err(err) => report_store_error("delete scenario", &err),
            }
            true
        }
        Msg::CancelDelete => {
            container.delete_confirm.cancel();
            true
        }
        Msg::ToggleActif(id) => {
            match container.store.apply(StoreAction::ToggleActif(id.clone())) {
                Ok(()) => {
                    if let Some(scenario) = container.store.get(&id) {
                        let state = if scenario.actif() { "enabled" } else { "disabled" };
                        show_toast(
                            "Scenario updated",
                            &format!("\"{}\" is now {state}.", scenario.label()),
                        );
                    }
                }
                Err(err) => report_store_error("toggle scenario", &err),
            }
            true
        }
        Msg::SetSiteFilter(site_id) => {
            container.filter.site_id = site_id;
            true
        }
        Msg::SetDateFrom(date) => {
            container.filter.date_range.from = date;
            true
        }
        Msg::SetDateTo(date) => {
            container.filter.date_range.to = date;
            true
        }
        Msg::ResetFilters => {
            container.filter.reset();
            true
        }
        Msg::OpenPreview(id) => {
            container.preview_for = Some(id);
            true
        }
        Msg::SetPreviewOpen(open) => {
            if !open {
                container.preview_for = None;
            }
            true
        }
    }
}

fn report_store_error(what: &str, err: &StoreError) {
    error!(format!("failed to {what}: {err}"));
    show_toast("Action failed", &err.to_string());
}
