pub mod classify;
pub mod registry;

pub use classify::{classify, normalize_card_id, ActionKind};
pub use registry::{EffectKind, MoveDef, MoveRegistry, StaticMoveRegistry, DEFEND_ID};
