//! Container state: the authoritative collection, active tab, filters,
//! selection and the pending-delete handshake.

use common::model::scenario::{Scenario, ScenarioKind};
use common::preview::MailPreviewData;
use common::store::{CollectionStore, DeleteConfirmation, ListFilter};

use crate::demo;

/// The container's tab state machine. Every tab is reachable from the
/// list; creation returns to the list on submit or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerTab {
    Liste,
    Creation,
    Detail,
    Statistiques,
}

impl ContainerTab {
    pub fn label(self) -> &'static str {
        match self {
            ContainerTab::Liste => "List",
            ContainerTab::Creation => "Create",
            ContainerTab::Detail => "Detail",
            ContainerTab::Statistiques => "Statistics",
        }
    }
}

pub struct ScenariosContainer {
    pub kind: ScenarioKind,
    /// Single source of truth for this container's collection.
    pub store: CollectionStore<Scenario>,
    pub tab: ContainerTab,
    /// Entity shown on the detail tab; may go stale after a delete, in
    /// which case the detail view falls back to its empty state.
    pub selected_id: Option<String>,
    /// Entity being edited on the creation tab; `None` means create mode.
    pub editing_id: Option<String>,
    pub filter: ListFilter,
    pub delete_confirm: DeleteConfirmation,
    /// Entity whose mail preview dialog is open.
    pub preview_for: Option<String>,
}

impl ScenariosContainer {
    pub fn new(kind: ScenarioKind) -> Self {
        Self {
            kind,
            store: CollectionStore::from_items(demo::seed_scenarios(kind)),
            tab: ContainerTab::Liste,
            selected_id: None,
            editing_id: None,
            filter: ListFilter::default(),
            delete_confirm: DeleteConfirmation::new(),
            preview_for: None,
        }
    }

    pub fn selected(&self) -> Option<&Scenario> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    pub fn editing(&self) -> Option<&Scenario> {
        self.editing_id.as_deref().and_then(|id| self.store.get(id))
    }

    /// Projection for the preview dialog; empty when the target vanished.
    pub fn preview_data(&self) -> MailPreviewData {
        self.preview_for
            .as_deref()
            .and_then(|id| self.store.get(id))
            .map(|scenario| MailPreviewData::from_bundle(&scenario.mail))
            .unwrap_or_default()
    }
}
