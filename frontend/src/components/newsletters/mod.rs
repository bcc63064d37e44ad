pub mod container;
pub mod editor;

pub use container::NewslettersContainer;
