//! Move definitions and the move registry boundary
//!
//! The combat engine owns what cards actually do; the walkthrough only needs
//! the effect-kind list of a move to tell attacks from everything else.

use crate::core::error::{Result, WalkthroughError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reserved identifier of the basic defend card
pub const DEFEND_ID: &str = "defend";

/// Closed set of card effect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Direct damage to the target
    Damage,
    /// Several small hits in one play
    MultiStrike,
    /// Damages the target and the player
    Recoil,
    /// Removes itself from the deck when played, damaging everything
    SelfDestruct,
    /// Damage that heals the player for part of the amount dealt
    Lifesteal,
    Block,
    Draw,
    Energy,
    Status,
    Heal,
}

impl EffectKind {
    /// Whether this effect causes damage when the card is played
    pub fn deals_damage(&self) -> bool {
        matches!(
            self,
            EffectKind::Damage
                | EffectKind::MultiStrike
                | EffectKind::Recoil
                | EffectKind::SelfDestruct
                | EffectKind::Lifesteal
        )
    }
}

/// Effect list of a single move, keyed by its base id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveDef {
    pub id: String,
    pub effects: Vec<EffectKind>,
}

/// Lookup boundary to the combat engine's move table
pub trait MoveRegistry {
    /// Look up a move by its base id (variant markers already stripped)
    fn lookup(&self, base_id: &str) -> Result<&MoveDef>;
}

/// In-memory move registry
#[derive(Debug, Default)]
pub struct StaticMoveRegistry {
    moves: AHashMap<String, MoveDef>,
}

impl StaticMoveRegistry {
    pub fn from_defs(defs: Vec<MoveDef>) -> Self {
        let mut moves = AHashMap::with_capacity(defs.len());
        for def in defs {
            moves.insert(def.id.clone(), def);
        }
        Self { moves }
    }

    /// The starter-deck move table shipped with the tutorial
    pub fn starter() -> Self {
        fn def(id: &str, effects: &[EffectKind]) -> MoveDef {
            MoveDef {
                id: id.to_string(),
                effects: effects.to_vec(),
            }
        }

        Self::from_defs(vec![
            def("tackle", &[EffectKind::Damage]),
            def("strike", &[EffectKind::Damage]),
            def("bash", &[EffectKind::Damage, EffectKind::Status]),
            def("cleave", &[EffectKind::MultiStrike]),
            def("flurry", &[EffectKind::MultiStrike]),
            def("reckless_swing", &[EffectKind::Damage, EffectKind::Recoil]),
            def("detonate", &[EffectKind::SelfDestruct]),
            def("leech", &[EffectKind::Lifesteal]),
            def("defend", &[EffectKind::Block]),
            def("brace", &[EffectKind::Block, EffectKind::Status]),
            def("second_wind", &[EffectKind::Heal]),
            def("focus", &[EffectKind::Energy]),
            def("foresight", &[EffectKind::Draw]),
            def("taunt", &[EffectKind::Status]),
        ])
    }

    /// Load a move table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        #[derive(Deserialize)]
        struct MovesFile {
            #[serde(rename = "move")]
            moves: Vec<MoveDef>,
        }

        let content = fs::read_to_string(path)?;
        let file: MovesFile = toml::from_str(&content)?;
        Ok(Self::from_defs(file.moves))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl MoveRegistry for StaticMoveRegistry {
    fn lookup(&self, base_id: &str) -> Result<&MoveDef> {
        self.moves
            .get(base_id)
            .ok_or_else(|| WalkthroughError::UnknownMove(base_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_table_lookup() {
        let registry = StaticMoveRegistry::starter();
        let def = registry.lookup("tackle").unwrap();
        assert_eq!(def.effects, vec![EffectKind::Damage]);
    }

    #[test]
    fn test_unknown_move_is_error() {
        let registry = StaticMoveRegistry::starter();
        let err = registry.lookup("hyper_beam").unwrap_err();
        assert!(matches!(err, WalkthroughError::UnknownMove(_)));
    }

    #[test]
    fn test_damage_dealing_kinds() {
        assert!(EffectKind::Damage.deals_damage());
        assert!(EffectKind::MultiStrike.deals_damage());
        assert!(EffectKind::Recoil.deals_damage());
        assert!(EffectKind::SelfDestruct.deals_damage());
        assert!(EffectKind::Lifesteal.deals_damage());

        assert!(!EffectKind::Block.deals_damage());
        assert!(!EffectKind::Draw.deals_damage());
        assert!(!EffectKind::Energy.deals_damage());
        assert!(!EffectKind::Status.deals_damage());
        assert!(!EffectKind::Heal.deals_damage());
    }

    #[test]
    fn test_parse_moves_toml() {
        let toml = r#"
            [[move]]
            id = "ember"
            effects = ["damage", "status"]

            [[move]]
            id = "guard"
            effects = ["block"]
        "#;
        #[derive(Deserialize)]
        struct MovesFile {
            #[serde(rename = "move")]
            moves: Vec<MoveDef>,
        }
        let file: MovesFile = toml::from_str(toml).unwrap();
        let registry = StaticMoveRegistry::from_defs(file.moves);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("ember").unwrap().effects,
            vec![EffectKind::Damage, EffectKind::Status]
        );
    }
}
