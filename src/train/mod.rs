pub mod trainer;
pub mod checkpoint;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train_step, StepOutcome};
pub use checkpoint::{Checkpoint, TrainReport};
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, train_loop_with};
