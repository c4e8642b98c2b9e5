pub mod math;
pub mod activation;
pub mod data;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::{Matrix, Mt, ShapeError, DEFAULT_SEED};
pub use activation::{nonlin, Sigmoid};
pub use data::Dataset;
pub use network::{Activations, Gradients, Network, WeightUpdates};
pub use loss::{output_error, MaeLoss};
pub use optim::Sgd;
pub use train::{train_loop, train_loop_with, train_step, Checkpoint, StepOutcome, TrainConfig, TrainReport};
