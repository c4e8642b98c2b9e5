use std::sync::mpsc;
use crate::train::checkpoint::Checkpoint;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`      — total Forward → Backward → Update steps
/// - `report_interval` — a `Checkpoint` is taken at every iteration index that
///                       is a multiple of this (0, interval, 2·interval, …);
///                       `0` turns checkpoints off
/// - `progress_tx`     — optional channel sender; each `Checkpoint` is also
///                       sent here. A dropped receiver does not stop training.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub iterations: usize,
    pub report_interval: usize,
    pub progress_tx: Option<mpsc::Sender<Checkpoint>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(iterations: usize, report_interval: usize) -> Self {
        TrainConfig {
            iterations,
            report_interval,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<Checkpoint>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub(crate) fn is_checkpoint(&self, iteration: usize) -> bool {
        self.report_interval != 0 && iteration % self.report_interval == 0
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(60_000, 10_000)
    }
}
