use chrono::NaiveDate;
use common::model::scenario::Scenario;

use super::state::ContainerTab;

#[derive(Clone)]
pub enum Msg {
    SetTab(ContainerTab),
    /// Opens the detail tab for one entity.
    ShowDetail(String),
    /// Opens the creation tab in create mode.
    NewScenario,
    /// Opens the creation tab seeded from an existing entity.
    EditScenario(String),
    /// Complete entity emitted by the editor.
    Submit(Scenario),
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
