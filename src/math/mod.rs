pub mod error;
pub mod matrix;
pub mod rng;

pub use error::ShapeError;
pub use matrix::Matrix;
pub use rng::{Mt, DEFAULT_SEED};
