use log::LevelFilter;
use xornet::{train_loop_with, Dataset, Network, Sgd, TrainConfig, DEFAULT_SEED};

// Trains the 3-4-1 network on XOR with the fixed seed, printing the error at
// each checkpoint as it is reached and then the trained output.
fn main() {
    logger().init();

    let data = Dataset::xor();
    let mut network = Network::seeded(DEFAULT_SEED);
    let report = train_loop_with(
        &mut network,
        &data,
        &Sgd::default(),
        &TrainConfig::default(),
        |checkpoint, _| println!("Error: {}", checkpoint.mean_abs_error),
    );

    println!("Output after training");
    println!("{}", report.output);
}

/// Warnings and errors only. The level is fixed; `RUST_LOG` is not read.
fn logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_ignores_environment() {
        std::env::set_var("RUST_LOG", "trace");
        assert_eq!(logger().build().filter(), LevelFilter::Warn);
    }
}
