pub mod network;

pub use network::{Activations, Gradients, Network, WeightUpdates};
pub use network::{HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE};
