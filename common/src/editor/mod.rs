//! Editor-side operations: boundary parsing, validation, step list
//! manipulation and the create/edit drafts that produce complete entities
//! on submit.

pub mod fields;
pub mod newsletter_draft;
pub mod scenario_draft;
pub mod steps;
