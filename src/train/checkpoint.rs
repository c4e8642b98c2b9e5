use serde::{Serialize, Deserialize};

use crate::math::Matrix;

/// Diagnostic taken during `train_loop` at every `report_interval`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Mean |target - output| over all examples, before this iteration's update.
    pub mean_abs_error: f64,
}

/// Result of a finished `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub iterations: usize,
    pub checkpoints: Vec<Checkpoint>,
    /// Output activations from the forward pass of the last iteration.
    pub output: Matrix,
}
