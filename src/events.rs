//! Solver event stream.
//!
//! The engine reports progress through a single discriminated event type
//! rather than separate update/complete/log callbacks. A host subscribes by
//! implementing [`EventSink`]; tests capture events into a `Vec` and assert
//! on the sequence.
//!
//! Every payload is a copy. No live reference to engine state ever crosses
//! this boundary.

/// Aggregate state published once per generation (and once at initialization).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Copy of the best board of the current generation.
    pub best_board: Vec<usize>,
    /// Attacking pair count of the best board (`usize::MAX` when the
    /// population is empty).
    pub best_conflicts: usize,
    /// Fitness of the best board.
    pub best_fitness: usize,
    /// Generation counter at the time of the snapshot.
    pub generation: usize,
    /// Mean fitness across the population.
    pub mean_fitness: f64,
    /// Mutation rate in effect.
    pub mutation_rate: f64,
}

/// One entry in the solver's event stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverEvent {
    /// Emitted after every evaluated generation, strictly in generation
    /// order, and once after initialization.
    Update(Snapshot),

    /// Emitted exactly once per run or step that terminates by solving or
    /// exhausting the generation budget. Never emitted on an explicit stop.
    Complete {
        /// Whether a zero-conflict board was found.
        solved: bool,
        /// Generations executed when the run ended.
        generations: usize,
    },

    /// Human-readable progress narration (initialization summary, periodic
    /// milestones, solved/stopped/exhausted notices).
    Log(String),
}

/// Receiver for [`SolverEvent`]s.
///
/// Implementations must not assume they can call back into the solver;
/// they receive owned copies of solver state only.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: SolverEvent);
}

/// Sink that discards every event. Useful for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: SolverEvent) {}
}

/// Capture sink: events accumulate in order, which makes run traces easy
/// to assert on in tests.
impl EventSink for Vec<SolverEvent> {
    fn emit(&mut self, event: SolverEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_captures_in_order() {
        let mut sink: Vec<SolverEvent> = Vec::new();
        sink.emit(SolverEvent::Log("a".into()));
        sink.emit(SolverEvent::Complete {
            solved: true,
            generations: 3,
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], SolverEvent::Log("a".into()));
        assert!(matches!(
            sink[1],
            SolverEvent::Complete {
                solved: true,
                generations: 3
            }
        ));
    }

    #[test]
    fn test_null_sink_discards() {
        let mut sink = NullSink;
        sink.emit(SolverEvent::Log("dropped".into()));
    }
}
