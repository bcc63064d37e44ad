pub mod mail;
pub mod newsletter;
pub mod reduction;
pub mod scenario;
pub mod site;
pub mod stats;
pub mod step;
