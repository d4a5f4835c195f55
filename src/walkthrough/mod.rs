pub mod sequencer;

pub use sequencer::{StepSequencer, StepView};
