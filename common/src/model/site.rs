use serde::{Deserialize, Serialize};

/// One entry of the read-only site registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub name: String,
}
