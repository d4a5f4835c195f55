pub mod anchor;
pub mod connector;
pub mod surface;

pub use anchor::{ConnectorTracker, TargetResolver};
pub use connector::compute_connector;
pub use surface::{BoxChangeCallback, StaticSurface, UiSurface};
