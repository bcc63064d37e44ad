use common::editor::scenario_draft::CriteriaField;
use common::editor::steps::{ReductionField, StepField};
use common::model::mail::{MailField, UtmKind};

pub enum Msg {
    SetNom(String),
    /// Site id picked in the selector; `None` clears the assignment.
    SetSite(Option<String>),
    SetActif(bool),
    EditMail(MailField),
    ResetMailUtm(UtmKind),
    EditCriteria(CriteriaField),
    EditReduction(ReductionField),
    AddStep,
    RemoveStep(String),
    UpdateStep(String, StepField),
    ResetStepUtm(String, UtmKind),
    Submit,
    Cancel,
}
