use common::model::scenario::{Scenario, ScenarioKind};
use common::model::site::Site;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScenarioEditorProps {
    /// Family of the scenario being built; fixes which criteria form is
    /// shown and whether steps are available.
    pub kind: ScenarioKind,
    /// Entity to edit; `None` opens the form in create mode.
    #[prop_or_default]
    pub scenario: Option<Scenario>,
    pub sites: Vec<Site>,
    /// Fired with the complete, validated entity on submit.
    pub on_submit: Callback<Scenario>,
    pub on_cancel: Callback<()>,
}
