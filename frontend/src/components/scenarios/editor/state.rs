//! Editor state: the working draft, the validation errors currently shown
//! and the content hash used for dirty tracking.

use common::editor::fields::ValidationError;
use common::editor::scenario_draft::ScenarioDraft;

use super::helpers::draft_md5;
use super::props::ScenarioEditorProps;

pub struct ScenarioEditor {
    pub draft: ScenarioDraft,
    /// Errors from the last failed submit; cleared on success.
    pub errors: Vec<ValidationError>,
    /// Hash of the draft as it was loaded. Comparing against the current
    /// hash drives the unsaved-changes indicator and the unload guard.
    pub original_md5: String,
}

impl ScenarioEditor {
    pub fn from_props(props: &ScenarioEditorProps) -> Self {
        let draft = match &props.scenario {
            Some(scenario) => ScenarioDraft::edit(scenario),
            None => ScenarioDraft::create(props.kind),
        };
        let original_md5 = draft_md5(&draft);
        Self {
            draft,
            errors: Vec::new(),
            original_md5,
        }
    }

    pub fn is_dirty(&self) -> bool {
        draft_md5(&self.draft) != self.original_md5
    }
}
