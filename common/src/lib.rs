//! Shared domain layer for the back-office marketing dashboard.
//!
//! Everything the UI mutates lives here: entity shapes (`model`), the
//! action-based collection store (`store`), editor operations and
//! validation (`editor`), and the read-only mail preview projection
//! (`preview`). The frontend crate only renders this state and forwards
//! user events back into it.

pub mod editor;
pub mod model;
pub mod preview;
pub mod store;
