//! Walkthrough step definitions and the built-in first-battle catalog

use crate::core::types::UiRegion;
use serde::{Deserialize, Serialize};

/// What must happen before the walkthrough leaves a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceCondition {
    /// Explicit acknowledgment from the player
    Manual,
    /// A card classified as an attack was played
    AttackPlayed,
    /// A card classified as a defend was played
    DefendPlayed,
    /// Any card was played, whatever its classification
    AnyCardPlayed,
    /// The player ended their turn
    TurnEnded,
    /// The enemy finished its turn
    EnemyTurnDone,
}

/// Placement hint for the instruction panel, purely presentational
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelZone {
    #[default]
    Primary,
    Secondary,
}

/// One immutable unit of the walkthrough
///
/// Steps live in a static ordered catalog and are evaluated strictly in
/// catalog order. `text` may contain a `{player}` placeholder substituted
/// at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: u32,
    #[serde(default)]
    pub highlight: Option<UiRegion>,
    pub text: String,
    pub advance: AdvanceCondition,
    #[serde(default)]
    pub zone: PanelZone,
    #[serde(default)]
    pub allow_skip: bool,
    #[serde(default)]
    pub allow_interaction: bool,
}

impl Step {
    /// Render the step text for a given player name
    pub fn render_text(&self, player: &str) -> String {
        self.text.replace("{player}", player)
    }
}

/// The shipped first-battle tutorial
///
/// Used when no catalog file is supplied. Covers every advance condition
/// the sequencer understands.
pub fn default_catalog() -> Vec<Step> {
    fn step(
        id: u32,
        highlight: Option<UiRegion>,
        text: &str,
        advance: AdvanceCondition,
    ) -> Step {
        Step {
            id,
            highlight,
            text: text.to_string(),
            advance,
            zone: PanelZone::Primary,
            allow_skip: false,
            allow_interaction: false,
        }
    }

    let mut steps = vec![
        step(
            0,
            None,
            "Welcome to your first battle, {player}! Let's walk through a turn.",
            AdvanceCondition::Manual,
        ),
        step(
            1,
            Some(UiRegion::Hand),
            "These are the cards in your hand. Each one is a single action.",
            AdvanceCondition::Manual,
        ),
        step(
            2,
            Some(UiRegion::EnergyMeter),
            "Playing a card costs energy. You get three energy every turn.",
            AdvanceCondition::Manual,
        ),
        step(
            3,
            Some(UiRegion::Hand),
            "Time to strike, {player}. Play an attack card from your hand.",
            AdvanceCondition::AttackPlayed,
        ),
        step(
            4,
            Some(UiRegion::EnemyBoard),
            "The enemy telegraphs its next move up here. It intends to attack.",
            AdvanceCondition::Manual,
        ),
        step(
            5,
            Some(UiRegion::Hand),
            "Blunt the incoming hit: play a defend card.",
            AdvanceCondition::DefendPlayed,
        ),
        step(
            6,
            Some(UiRegion::Hand),
            "Spend your remaining energy on any card you like.",
            AdvanceCondition::AnyCardPlayed,
        ),
        step(
            7,
            Some(UiRegion::EndTurnButton),
            "Out of options? End your turn here.",
            AdvanceCondition::TurnEnded,
        ),
        step(
            8,
            Some(UiRegion::EnemyBoard),
            "The enemy acts. Watch what its telegraphed move does.",
            AdvanceCondition::EnemyTurnDone,
        ),
        step(
            9,
            Some(UiRegion::DrawPile),
            "Played cards go to the discard pile and return when your draw pile runs dry.",
            AdvanceCondition::Manual,
        ),
        step(
            10,
            None,
            "That's a full turn, {player}. The rest is up to you!",
            AdvanceCondition::Manual,
        ),
    ];

    // Interaction steps keep the battle UI live; bookend steps can be skipped.
    for s in &mut steps {
        s.allow_interaction = !matches!(s.advance, AdvanceCondition::Manual);
    }
    steps[0].allow_skip = true;
    steps[10].allow_skip = true;
    steps[8].zone = PanelZone::Secondary;
    steps[9].zone = PanelZone::Secondary;

    steps
}
