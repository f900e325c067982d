//! Pipeline module - Generation, parallel evaluation and frontier merging.
//!
//! Three stages connected by bounded channels:
//!
//! 1. one producer thread enumerates patterns breadth-first,
//! 2. a pool of workers evaluates each pattern against the shared reference
//!    samples, each worker owning its own scratch state,
//! 3. the calling thread merges results into the Pareto frontier.
//!
//! The bounded channels apply backpressure: the producer stalls when the
//! workers fall behind instead of materializing the whole search space.
//! Shutdown needs no sentinel values: each stage's receive loop ends when
//! every sender for its channel has been dropped, so the producer finishing
//! drains through the workers and closes the result channel exactly once.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;
use log::{debug, info};

use crate::geometry::Dimensions;
use crate::ore::generate_samples;
use crate::schema::{ConfigError, RunConfig};
use crate::search::{GenerationConstraints, PatternGenerator};
use crate::stats::{EvaluatedPattern, PatternEvaluator, PatternStore};

/// Everything a finished run produces.
pub struct RunOutcome {
    /// The surviving Pareto frontier.
    pub store: PatternStore,
    /// Total number of patterns evaluated, retained or not.
    pub patterns_evaluated: u64,
    /// Number of reference samples each pattern was measured against.
    pub sample_count: usize,
}

/// Runs the full optimization described by `config`.
pub fn run(config: &RunConfig) -> Result<RunOutcome, ConfigError> {
    config.validate()?;

    let dims = Arc::new(Dimensions::new(
        config.sample.width,
        config.sample.height,
        config.sample.length,
    ));
    info!(
        "generating {} reference samples of {dims}",
        config.evaluation.sample_count
    );
    let samples = Arc::new(generate_samples(
        config.evaluation.sample_count,
        &dims,
        config.sample.lowest_floor,
        config.evaluation.random_seed,
    ));

    let constraints = GenerationConstraints::new(
        config.search.max_dug_blocks,
        config.search.max_actions,
    );
    let generator = PatternGenerator::central(Arc::clone(&dims), config.search.reach, constraints);

    let workers = config
        .pipeline
        .workers
        .unwrap_or_else(|| num_cpus::get().saturating_sub(1).max(1));
    info!("starting evaluation: {constraints}, {workers} workers");

    let (pattern_tx, pattern_rx) = bounded(config.pipeline.queue_capacity);
    let (result_tx, result_rx) = bounded::<EvaluatedPattern>(config.pipeline.queue_capacity);

    let mut store = PatternStore::new();
    let mut patterns_evaluated = 0u64;

    thread::scope(|scope| {
        scope.spawn(move || {
            for pattern in generator {
                // send fails only when every worker is gone, which means
                // the run is over anyway
                if pattern_tx.send(pattern).is_err() {
                    break;
                }
            }
        });

        for _ in 0..workers {
            let pattern_rx = pattern_rx.clone();
            let result_tx = result_tx.clone();
            let samples = Arc::clone(&samples);
            scope.spawn(move || {
                let mut evaluator = PatternEvaluator::new(samples);
                for pattern in pattern_rx {
                    let stats = evaluator.evaluate(&pattern);
                    if result_tx.send(EvaluatedPattern::new(pattern, stats)).is_err() {
                        break;
                    }
                }
            });
        }
        // the workers hold the only remaining senders: the result channel
        // closes when the last of them finishes
        drop(result_tx);
        drop(pattern_rx);

        for evaluated in result_rx {
            patterns_evaluated += 1;
            if patterns_evaluated % 10_000 == 0 {
                debug!("{patterns_evaluated} patterns evaluated, {store}");
            }
            let stats = evaluated.stats;
            if store.add(evaluated) {
                info!("frontier updated by [{stats}], now {store}");
            }
        }
    });

    info!("evaluation done: {patterns_evaluated} patterns, {store}");
    Ok(RunOutcome {
        store,
        patterns_evaluated,
        sample_count: config.evaluation.sample_count,
    })
}
