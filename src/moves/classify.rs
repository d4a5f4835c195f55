//! Coarse classification of played cards
//!
//! The sequencer only distinguishes attacks, defends, and everything else.
//! Classification never fails: a card the registry does not know is "other".

use crate::moves::registry::{MoveRegistry, DEFEND_ID};

/// Coarse category of a played card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Attack,
    Defend,
    Other,
}

/// Strip upgrade markers from a card id
///
/// Upgraded cards carry trailing `+` markers ("strike+", "strike++"); the
/// registry is keyed by the base id.
pub fn normalize_card_id(card_id: &str) -> &str {
    card_id.trim_end_matches('+')
}

/// Classify a played card against the move registry
///
/// The reserved defend id classifies without a lookup. A move whose effect
/// list contains any damage-dealing kind is an attack. Lookup failures
/// degrade to [`ActionKind::Other`] rather than surfacing an error.
pub fn classify(registry: &dyn MoveRegistry, card_id: &str) -> ActionKind {
    let base = normalize_card_id(card_id);
    if base == DEFEND_ID {
        return ActionKind::Defend;
    }

    match registry.lookup(base) {
        Ok(def) => {
            if def.effects.iter().any(|e| e.deals_damage()) {
                ActionKind::Attack
            } else {
                ActionKind::Other
            }
        }
        Err(_) => {
            tracing::warn!("Card {:?} not in move registry, treating as other", card_id);
            ActionKind::Other
        }
    }
}
