pub mod activation;

pub use activation::{nonlin, Sigmoid};
