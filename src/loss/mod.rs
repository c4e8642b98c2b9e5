pub mod mae;

pub use mae::{output_error, MaeLoss};
