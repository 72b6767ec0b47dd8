//! The evolutionary engine: population, generation loop, and the
//! run/step/stop state machine.
//!
//! [`Solver`] owns all mutable search state. Hosts drive it through the
//! command methods ([`initialize`](Solver::initialize), [`solve`](Solver::solve),
//! [`step`](Solver::step), [`stop`](Solver::stop), [`reset`](Solver::reset))
//! and observe it through the event sink plus side-effect-free accessors.
//! Commands that do not apply to the current mode are silent no-ops; the
//! engine itself never fails — the worst outcome is exhausting the
//! generation budget, reported as `Complete { solved: false, .. }`.

use crate::board::{Board, FitnessRecord};
use crate::config::SolverConfig;
use crate::events::{EventSink, NullSink, Snapshot, SolverEvent};
use crate::operators::{order_crossover, swap_mutation};
use crate::selection::{tournament, TOURNAMENT_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Engine run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// No run in progress; all commands accepted.
    Idle,
    /// A continuous run owns the generation loop.
    RunningContinuous,
    /// A single stepped generation is executing.
    RunningStepped,
}

/// Cross-thread cancellation handle for a continuous run.
///
/// The flag is checked at the top of every loop iteration, so cancellation
/// takes effect no later than the end of the generation in flight.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests that the current continuous run stop.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Best-individual-so-far cache, replaced by every evaluation pass.
#[derive(Debug, Clone)]
struct BestRecord {
    board: Board,
    fitness: usize,
    conflicts: usize,
}

impl BestRecord {
    /// The "no solution" sentinel used for an empty population.
    fn sentinel() -> Self {
        Self {
            board: Board::empty(),
            fitness: 0,
            conflicts: usize::MAX,
        }
    }
}

/// Aggregate query-accessor bundle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceStats {
    /// Copy of the best board found so far.
    pub best_board: Vec<usize>,
    /// Conflicts of the best board (`usize::MAX` before initialization).
    pub best_conflicts: usize,
    /// Fitness of the best board.
    pub best_fitness: usize,
    /// Current generation counter.
    pub generation: usize,
    /// Mean fitness of the current population.
    pub mean_fitness: f64,
    /// Whether a run is in progress.
    pub running: bool,
    /// Whether a zero-conflict board has been found.
    pub solved: bool,
    /// Remaining generation budget as a percentage string
    /// (`"n/a"` when the cap is zero).
    pub efficiency: String,
}

/// Evolutionary N-Queens solver.
///
/// # Usage
///
/// ```
/// use queens_ga::{Solver, SolverConfig, SolverEvent};
///
/// let config = SolverConfig::default().with_board_size(6).with_seed(42);
/// let mut solver = Solver::new(config.clone(), Vec::<SolverEvent>::new());
/// solver.initialize(config);
/// solver.solve();
/// assert!(!solver.is_running());
/// ```
#[derive(Debug)]
pub struct Solver<S: EventSink = NullSink> {
    config: SolverConfig,
    population: Vec<Board>,
    records: Vec<FitnessRecord>,
    generation: usize,
    best: BestRecord,
    mean_fitness: f64,
    mode: RunMode,
    cancel: Arc<AtomicBool>,
    rng: StdRng,
    sink: S,
}

impl Solver<NullSink> {
    /// Creates a solver that discards events.
    pub fn headless(config: SolverConfig) -> Self {
        Self::new(config, NullSink)
    }
}

impl<S: EventSink> Solver<S> {
    /// Creates a solver with an empty population.
    ///
    /// The RNG is seeded here, once, from `config.seed`; the stream then
    /// advances across re-initializations, so [`reset`](Self::reset) draws a
    /// genuinely fresh population even under a fixed seed. Call
    /// [`initialize`](Self::initialize) before running.
    pub fn new(config: SolverConfig, sink: S) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self {
            config,
            population: Vec::new(),
            records: Vec::new(),
            generation: 0,
            best: BestRecord::sentinel(),
            mean_fitness: 0.0,
            mode: RunMode::Idle,
            cancel: Arc::new(AtomicBool::new(false)),
            rng,
            sink,
        }
    }

    /// (Re)configures the solver and regenerates the population.
    ///
    /// Valid from any state; always leaves the engine [`RunMode::Idle`] with
    /// the generation counter at zero. Emits one `Update` snapshot for the
    /// freshly evaluated population, then an initialization summary log.
    ///
    /// The configuration is assumed to be normalized (see
    /// [`SolverConfig::validate`]); the engine does not re-validate.
    pub fn initialize(&mut self, config: SolverConfig) {
        self.config = config;
        self.mode = RunMode::Idle;
        self.cancel.store(false, Ordering::Relaxed);
        self.generation = 0;
        self.population = (0..self.config.population_size)
            .map(|_| Board::random(self.config.board_size, &mut self.rng))
            .collect();
        self.evaluate_population();
        self.emit_update();
        self.sink.emit(SolverEvent::Log(format!(
            "initialized {}-queens: population {}, cap {} generations, mutation rate {:.2}",
            self.config.board_size,
            self.config.population_size,
            self.config.max_generations,
            self.config.mutation_rate,
        )));
    }

    /// Runs one elitist generational replacement cycle.
    ///
    /// Returns whether the new generation contains a zero-conflict board.
    /// With an empty population this is a reported no-op.
    pub fn run_generation(&mut self) -> bool {
        if self.population.is_empty() {
            self.sink
                .emit(SolverEvent::Log("empty population: no progress".into()));
            return false;
        }

        let target = self.config.population_size;
        let k = TOURNAMENT_SIZE.min(self.population.len());

        // Elitism: the best-known board survives unchanged, which makes
        // best fitness monotonically non-decreasing across generations.
        let mut next = Vec::with_capacity(target);
        next.push(self.best.board.clone());

        while next.len() < target {
            let p1 = tournament(&self.records, k, &mut self.rng);
            let p2 = tournament(&self.records, k, &mut self.rng);
            let mut child = order_crossover(
                self.population[p1].rows(),
                self.population[p2].rows(),
                &mut self.rng,
            );
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                swap_mutation(&mut child, &mut self.rng);
            }
            next.push(Board::from_rows(child));
        }

        self.population = next;
        self.generation += 1;
        self.evaluate_population();

        let solved = self.best.conflicts == 0;
        self.emit_update();

        if solved {
            self.sink.emit(SolverEvent::Log(format!(
                "solved at generation {}: {:?}",
                self.generation,
                self.best.board.rows(),
            )));
        } else if self.generation % 10 == 0 {
            self.sink.emit(SolverEvent::Log(format!(
                "generation {}: best {}/{} ({} conflicts), mean {:.1}",
                self.generation,
                self.best.fitness,
                crate::board::max_fitness(self.config.board_size),
                self.best.conflicts,
                self.mean_fitness,
            )));
        }

        // Pacing so a host can render between generations. Stepped mode
        // skips it; a delay of zero disables it.
        if self.config.step_delay_ms > 0 && self.mode != RunMode::RunningStepped {
            thread::sleep(Duration::from_millis(self.config.step_delay_ms));
        }

        solved
    }

    /// Starts a continuous run. No-op unless the engine is idle.
    ///
    /// Loops until a zero-conflict board appears (`Complete { solved: true }`),
    /// the generation cap is reached (`Complete { solved: false }`), or the
    /// run is cancelled through a [`StopHandle`] (no completion event).
    pub fn solve(&mut self) {
        if self.mode != RunMode::Idle {
            return;
        }
        if self.population.is_empty() {
            self.sink
                .emit(SolverEvent::Log("empty population: no progress".into()));
            return;
        }

        self.mode = RunMode::RunningContinuous;
        self.cancel.store(false, Ordering::Relaxed);

        loop {
            if self.cancel.load(Ordering::Relaxed) {
                // Cancelled externally; the stop path owns the narration.
                self.mode = RunMode::Idle;
                return;
            }
            if self.generation >= self.config.max_generations {
                self.finish(false);
                return;
            }
            if self.run_generation() {
                self.finish(true);
                return;
            }
        }
    }

    /// Advances exactly one generation, then returns to idle.
    ///
    /// No-op while a continuous run owns the loop. Emits `Complete` only if
    /// this single generation solved the board.
    pub fn step(&mut self) {
        if self.mode == RunMode::RunningContinuous {
            return;
        }
        self.mode = RunMode::RunningStepped;
        if self.run_generation() {
            self.finish(true);
        } else {
            self.mode = RunMode::Idle;
        }
    }

    /// Cancels the current run. No-op while idle.
    ///
    /// Distinguished from natural completion: no `Complete` event is emitted.
    pub fn stop(&mut self) {
        if self.mode == RunMode::Idle {
            return;
        }
        self.cancel.store(true, Ordering::Relaxed);
        self.mode = RunMode::Idle;
        self.sink.emit(SolverEvent::Log(format!(
            "stopped at generation {}",
            self.generation
        )));
    }

    /// Stops any current run and reinitializes with the last configuration.
    pub fn reset(&mut self) {
        self.stop();
        let config = self.config.clone();
        self.initialize(config);
    }

    /// Returns a handle that can cancel a continuous run from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.cancel))
    }

    /// Ends a run: back to idle, completion event with the outcome.
    fn finish(&mut self, solved: bool) {
        self.mode = RunMode::Idle;
        if !solved {
            self.sink.emit(SolverEvent::Log(format!(
                "no solution within {} generations ({} conflicts remain)",
                self.generation, self.best.conflicts,
            )));
        }
        self.sink.emit(SolverEvent::Complete {
            solved,
            generations: self.generation,
        });
    }

    /// Recomputes fitness records for the whole population in one pass,
    /// tracking the best individual (first-seen wins ties) and the mean.
    fn evaluate_population(&mut self) {
        self.records = self.population.iter().map(FitnessRecord::of).collect();

        if self.records.is_empty() {
            self.best = BestRecord::sentinel();
            self.mean_fitness = 0.0;
            return;
        }

        let mut best_idx = 0;
        let mut sum = 0usize;
        for (i, rec) in self.records.iter().enumerate() {
            sum += rec.fitness;
            if rec.fitness > self.records[best_idx].fitness {
                best_idx = i;
            }
        }

        let rec = self.records[best_idx];
        self.best = BestRecord {
            board: self.population[best_idx].clone(),
            fitness: rec.fitness,
            conflicts: rec.conflicts,
        };
        self.mean_fitness = sum as f64 / self.records.len() as f64;
    }

    fn emit_update(&mut self) {
        let snapshot = Snapshot {
            best_board: self.best.board.rows().to_vec(),
            best_conflicts: self.best.conflicts,
            best_fitness: self.best.fitness,
            generation: self.generation,
            mean_fitness: self.mean_fitness,
            mutation_rate: self.config.mutation_rate,
        };
        self.sink.emit(SolverEvent::Update(snapshot));
    }

    // ---- Query accessors (side-effect-free) ----

    /// Copy of the best board found so far.
    pub fn best_board(&self) -> Board {
        self.best.board.clone()
    }

    /// Conflict count of the best board (`usize::MAX` before initialization).
    pub fn best_conflicts(&self) -> usize {
        self.best.conflicts
    }

    /// Fitness of the best board.
    pub fn best_fitness(&self) -> usize {
        self.best.fitness
    }

    /// Current generation counter.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Mean fitness of the current population.
    pub fn mean_fitness(&self) -> f64 {
        self.mean_fitness
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.mode != RunMode::Idle
    }

    /// Whether the best board has zero conflicts.
    pub fn is_solved(&self) -> bool {
        self.best.conflicts == 0
    }

    /// Current run mode.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Remaining generation budget as a percentage string.
    ///
    /// `max(0, (cap - generation) / cap) * 100`, or `"n/a"` when the cap
    /// is zero.
    pub fn efficiency(&self) -> String {
        if self.config.max_generations == 0 {
            return "n/a".into();
        }
        let remaining = self.config.max_generations.saturating_sub(self.generation);
        let percent = remaining as f64 / self.config.max_generations as f64 * 100.0;
        format!("{percent:.1}%")
    }

    /// Full performance snapshot bundling every accessor.
    pub fn stats(&self) -> PerformanceStats {
        PerformanceStats {
            best_board: self.best.board.rows().to_vec(),
            best_conflicts: self.best.conflicts,
            best_fitness: self.best.fitness,
            generation: self.generation,
            mean_fitness: self.mean_fitness,
            running: self.is_running(),
            solved: self.is_solved(),
            efficiency: self.efficiency(),
        }
    }
}
