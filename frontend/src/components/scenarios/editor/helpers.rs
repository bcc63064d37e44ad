use common::editor::scenario_draft::ScenarioDraft;

/// Content hash of the draft, for dirty checking. Serialization order is
/// stable, so equal drafts always hash equal.
pub fn draft_md5(draft: &ScenarioDraft) -> String {
    let json = serde_json::to_string(draft.scenario()).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}
