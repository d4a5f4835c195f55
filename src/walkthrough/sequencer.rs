//! Step-advancement state machine
//!
//! Owns the ordered step list and the current position. External
//! notifications are checked against the active step's advance condition;
//! anything that does not match is a silent no-op, so stray player actions
//! never error and never move the walkthrough.

use crate::catalog::step::{AdvanceCondition, PanelZone, Step};
use crate::core::types::UiRegion;
use crate::moves::classify::{classify, ActionKind};
use crate::moves::registry::MoveRegistry;
use std::sync::Arc;

/// Read-only snapshot of the active step, derived on every call
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub is_active: bool,
    pub highlight: Option<UiRegion>,
    pub step_text: Option<String>,
    pub can_skip: bool,
    pub allow_interaction: bool,
}

/// Drives a walkthrough catalog from start to completion
///
/// The index moves forward only, one step per satisfied condition, and an
/// index equal to the catalog length means the walkthrough is done. The
/// completion handler fires exactly once, on the transition into that state.
pub struct StepSequencer {
    steps: Vec<Step>,
    registry: Arc<dyn MoveRegistry>,
    player: String,
    current: usize,
    completion_fired: bool,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl StepSequencer {
    pub fn new(steps: Vec<Step>, registry: Arc<dyn MoveRegistry>, player: &str) -> Self {
        Self {
            steps,
            registry,
            player: player.to_string(),
            current: 0,
            completion_fired: false,
            on_complete: None,
        }
    }

    /// Install the handler invoked when the final step is passed
    pub fn set_completion_handler(&mut self, handler: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(handler));
    }

    pub fn is_active(&self) -> bool {
        self.current < self.steps.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.is_active()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    /// Highlight region of the active step, if any
    pub fn highlight(&self) -> Option<UiRegion> {
        self.current_step().and_then(|s| s.highlight)
    }

    /// Panel placement hint of the active step
    pub fn zone(&self) -> PanelZone {
        self.current_step().map(|s| s.zone).unwrap_or_default()
    }

    /// Number of steps in the catalog
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Snapshot of the active step for the presentation boundary
    pub fn view(&self) -> StepView {
        match self.current_step() {
            Some(step) => StepView {
                is_active: true,
                highlight: step.highlight,
                step_text: Some(step.render_text(&self.player)),
                can_skip: step.allow_skip,
                allow_interaction: step.allow_interaction,
            },
            None => StepView {
                is_active: false,
                highlight: None,
                step_text: None,
                can_skip: false,
                allow_interaction: false,
            },
        }
    }

    /// Unconditionally move to the next step
    ///
    /// No-op once complete. Fires the completion handler on the transition
    /// past the final step, and never again.
    pub fn advance(&mut self) {
        if self.current >= self.steps.len() {
            return;
        }
        self.current += 1;
        tracing::debug!("Walkthrough advanced to step index {}", self.current);

        if self.current == self.steps.len() && !self.completion_fired {
            self.completion_fired = true;
            tracing::info!("Walkthrough complete after {} steps", self.steps.len());
            if let Some(handler) = self.on_complete.as_mut() {
                handler();
            }
        }
    }

    /// Skip the active step
    ///
    /// State-wise identical to [`advance`](Self::advance). Whether the
    /// active step may be skipped is a presentation decision (`can_skip`);
    /// the sequencer does not re-check it here.
    pub fn skip(&mut self) {
        self.advance();
    }

    /// The player played a card
    ///
    /// Tries, in fixed priority order, the attack gate, the defend gate,
    /// then the any-card gate, and advances on the first satisfied match.
    /// At most one advance per call. Returns whether an advance occurred.
    pub fn notify_card_played(&mut self, card_id: &str) -> bool {
        if self.is_complete() {
            return false;
        }
        let kind = classify(self.registry.as_ref(), card_id);

        let checks = [
            (AdvanceCondition::AttackPlayed, kind == ActionKind::Attack),
            (AdvanceCondition::DefendPlayed, kind == ActionKind::Defend),
            (AdvanceCondition::AnyCardPlayed, !card_id.is_empty()),
        ];

        for (condition, satisfied) in checks {
            if satisfied && self.try_satisfy(condition) {
                return true;
            }
        }
        false
    }

    /// The player ended their turn
    pub fn notify_turn_ended(&mut self) -> bool {
        self.try_satisfy(AdvanceCondition::TurnEnded)
    }

    /// The enemy finished its turn
    pub fn notify_enemy_turn_done(&mut self) -> bool {
        self.try_satisfy(AdvanceCondition::EnemyTurnDone)
    }

    /// Advance if the active step waits on exactly this condition
    fn try_satisfy(&mut self, condition: AdvanceCondition) -> bool {
        let Some(step) = self.current_step() else {
            return false;
        };
        if step.advance != condition {
            return false;
        }
        self.advance();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::step::PanelZone;
    use crate::moves::registry::StaticMoveRegistry;
    use std::cell::Cell;
    use std::rc::Rc;

    fn step(id: u32, advance: AdvanceCondition) -> Step {
        Step {
            id,
            highlight: None,
            text: format!("step {id}"),
            advance,
            zone: PanelZone::Primary,
            allow_skip: false,
            allow_interaction: false,
        }
    }

    fn sequencer(conditions: &[AdvanceCondition]) -> StepSequencer {
        let steps = conditions
            .iter()
            .enumerate()
            .map(|(i, c)| step(i as u32, *c))
            .collect();
        StepSequencer::new(steps, Arc::new(StaticMoveRegistry::starter()), "Mira")
    }

    #[test]
    fn test_advance_walks_whole_catalog() {
        let mut seq = sequencer(&[AdvanceCondition::Manual; 3]);
        assert!(seq.is_active());

        seq.advance();
        seq.advance();
        assert_eq!(seq.current_index(), 2);
        assert!(seq.is_active());

        seq.advance();
        assert!(seq.is_complete());
    }

    #[test]
    fn test_completion_handler_fires_exactly_once() {
        let mut seq = sequencer(&[AdvanceCondition::Manual; 2]);
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        seq.set_completion_handler(move || counter.set(counter.get() + 1));

        seq.advance();
        assert_eq!(fired.get(), 0);

        seq.advance();
        assert_eq!(fired.get(), 1);

        // Further commands never re-fire
        seq.advance();
        seq.skip();
        seq.notify_turn_ended();
        seq.notify_card_played("tackle");
        assert_eq!(fired.get(), 1);
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_attack_gate_matches_attack_only() {
        let mut seq = sequencer(&[AdvanceCondition::AttackPlayed]);

        assert!(!seq.notify_card_played("brace"));
        assert!(!seq.notify_card_played("unknown_card"));
        assert_eq!(seq.current_index(), 0);

        assert!(seq.notify_card_played("tackle"));
        assert!(seq.is_complete());
    }

    #[test]
    fn test_defend_gate_matches_defend_only() {
        let mut seq = sequencer(&[AdvanceCondition::DefendPlayed]);

        assert!(!seq.notify_card_played("tackle"));
        assert!(seq.notify_card_played("defend+"));
        assert!(seq.is_complete());
    }

    #[test]
    fn test_any_card_gate_takes_everything_nonempty() {
        // An attack still satisfies an any-card gate: the more specific
        // gates fail the condition match and the chain falls through.
        let mut seq = sequencer(&[
            AdvanceCondition::AnyCardPlayed,
            AdvanceCondition::AnyCardPlayed,
            AdvanceCondition::AnyCardPlayed,
        ]);

        assert!(seq.notify_card_played("tackle"));
        assert!(seq.notify_card_played("second_wind"));
        assert!(!seq.notify_card_played(""));
        assert_eq!(seq.current_index(), 2);

        assert!(seq.notify_card_played("totally_unknown"));
        assert!(seq.is_complete());
    }

    #[test]
    fn test_one_advance_per_card_at_most() {
        let mut seq = sequencer(&[
            AdvanceCondition::AttackPlayed,
            AdvanceCondition::AnyCardPlayed,
        ]);

        // The attack satisfies step 0; step 1 must wait for its own card.
        assert!(seq.notify_card_played("tackle"));
        assert_eq!(seq.current_index(), 1);
        assert!(seq.is_active());
    }

    #[test]
    fn test_turn_notifications_gate_independently() {
        let mut seq = sequencer(&[
            AdvanceCondition::TurnEnded,
            AdvanceCondition::EnemyTurnDone,
        ]);

        assert!(!seq.notify_enemy_turn_done());
        assert!(seq.notify_turn_ended());
        assert!(!seq.notify_turn_ended());
        assert!(seq.notify_enemy_turn_done());
        assert!(seq.is_complete());
    }

    #[test]
    fn test_view_derivation() {
        let mut steps = vec![step(0, AdvanceCondition::Manual)];
        steps[0].highlight = Some(UiRegion::Hand);
        steps[0].text = "Hello, {player}!".into();
        steps[0].allow_skip = true;

        let mut seq =
            StepSequencer::new(steps, Arc::new(StaticMoveRegistry::starter()), "Mira");

        let view = seq.view();
        assert!(view.is_active);
        assert_eq!(view.highlight, Some(UiRegion::Hand));
        assert_eq!(view.step_text.as_deref(), Some("Hello, Mira!"));
        assert!(view.can_skip);
        assert!(!view.allow_interaction);

        seq.advance();
        let done = seq.view();
        assert!(!done.is_active);
        assert_eq!(done.highlight, None);
        assert_eq!(done.step_text, None);
        assert!(!done.can_skip);
        assert!(!done.allow_interaction);
    }
}
