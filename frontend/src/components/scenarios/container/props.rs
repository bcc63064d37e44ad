use common::model::scenario::ScenarioKind;
use common::model::site::Site;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScenariosProps {
    /// Which scenario family this container manages.
    pub kind: ScenarioKind,
    /// Read-only site registry for the filter bar and the editor.
    pub sites: Vec<Site>,
}
