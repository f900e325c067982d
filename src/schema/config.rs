//! Configuration types for an optimization run.

use serde::{Deserialize, Serialize};

use crate::geometry::DigRange;

fn default_lowest_floor() -> i32 {
    5
}

fn default_queue_capacity() -> usize {
    200
}

/// Top-level run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Reference sample geometry.
    pub sample: SampleConfig,
    /// Ore generation and evaluation parameters.
    pub evaluation: EvaluationConfig,
    /// Pattern enumeration parameters.
    pub search: SearchConfig,
    /// Threading and queueing parameters.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Shape of the reference samples, in blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Sample width in blocks (X dimension).
    pub width: usize,
    /// Sample height in blocks (Y dimension).
    pub height: usize,
    /// Sample length in blocks (Z dimension).
    pub length: usize,
    /// World Y level of the sample's lowest layer. Ore density depends on
    /// depth, so this anchors the sample in the world's vertical scale.
    #[serde(default = "default_lowest_floor")]
    pub lowest_floor: i32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 5,
            length: 16,
            lowest_floor: 5,
        }
    }
}

/// How many samples to measure each pattern against, and how to seed their
/// generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Number of reference samples each pattern is evaluated on.
    pub sample_count: usize,
    /// Base seed for reproducible sample generation. None draws from entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            sample_count: 50,
            random_seed: None,
        }
    }
}

/// Bounds on the pattern enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Hard cap on removed blocks per pattern.
    pub max_dug_blocks: usize,
    /// Optional cap on actions taken to reach a pattern.
    #[serde(default)]
    pub max_actions: Option<usize>,
    /// How far a player can dig from a standing position.
    #[serde(default)]
    pub reach: DigRange,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_dug_blocks: 20,
            max_actions: None,
            reach: DigRange::Strict,
        }
    }
}

/// Threading and queue sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Evaluation worker count. None uses all cores but one.
    #[serde(default)]
    pub workers: Option<usize>,
    /// Bound on each inter-stage channel, in items.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: None,
            queue_capacity: 200,
        }
    }
}

impl RunConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample.width == 0 || self.sample.height == 0 || self.sample.length == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        // an access needs feet, head and one block of headroom
        if self.sample.height < 3 {
            return Err(ConfigError::SampleTooShallow {
                height: self.sample.height,
            });
        }
        if self.evaluation.sample_count == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.search.max_dug_blocks == 0 {
            return Err(ConfigError::NoDigBudget);
        }
        if self.pipeline.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Sample dimensions (width, height, length) must be non-zero")]
    InvalidDimensions,
    #[error("Sample height {height} is too shallow, a standing player needs at least 3")]
    SampleTooShallow { height: usize },
    #[error("Sample count must be non-zero")]
    NoSamples,
    #[error("Max dug blocks must be non-zero")]
    NoDigBudget,
    #[error("Queue capacity must be non-zero")]
    InvalidQueueCapacity,
}
