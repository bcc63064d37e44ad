pub mod confirm;
pub mod forms;
pub mod newsletters;
pub mod preview;
pub mod reduction;
pub mod scenarios;
pub mod site_select;
pub mod stats;
