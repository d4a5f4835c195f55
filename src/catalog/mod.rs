pub mod loader;
pub mod step;

pub use loader::{load_catalog, validate_catalog};
pub use step::{default_catalog, AdvanceCondition, PanelZone, Step};
