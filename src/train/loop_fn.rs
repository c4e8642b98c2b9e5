use log::{debug, info};

use crate::data::Dataset;
use crate::loss::mae::MaeLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::checkpoint::{Checkpoint, TrainReport};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

/// Trains `network` for exactly `config.iterations` steps and reports the
/// checkpoints plus the output of the last forward pass.
///
/// There is no early stopping: every iteration runs forward, backward and
/// update unconditionally. A checkpoint records the error seen by that
/// iteration's forward pass, before its update. If a `progress_tx` receiver
/// has gone away, sends are dropped and training continues.
///
/// With `iterations == 0` the network is left untouched and the report's
/// output is a fresh forward pass.
pub fn train_loop(
    network: &mut Network,
    data: &Dataset,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> TrainReport {
    train_loop_with(network, data, optimizer, config, |_, _| {})
}

/// Same as `train_loop`, but calls `on_checkpoint` as soon as each checkpoint
/// is taken, with the network as it stands after that iteration's update.
pub fn train_loop_with<F>(
    network: &mut Network,
    data: &Dataset,
    optimizer: &Sgd,
    config: &TrainConfig,
    mut on_checkpoint: F,
) -> TrainReport
where
    F: FnMut(&Checkpoint, &Network),
{
    info!(
        "training for {} iterations on {} examples (learning rate {})",
        config.iterations,
        data.len(),
        optimizer.learning_rate
    );

    let mut checkpoints = Vec::new();
    let mut output = None;

    for iteration in 0..config.iterations {
        let outcome = train_step(network, data, optimizer);

        if config.is_checkpoint(iteration) {
            let checkpoint = Checkpoint {
                iteration,
                mean_abs_error: MaeLoss::loss(&outcome.gradients.output_error),
            };
            debug!("iteration {iteration}: mean abs error {}", checkpoint.mean_abs_error);

            if let Some(ref tx) = config.progress_tx {
                let _ = tx.send(checkpoint);
            }
            on_checkpoint(&checkpoint, network);
            checkpoints.push(checkpoint);
        }

        output = Some(outcome.activations.output);
    }

    let output = output.unwrap_or_else(|| network.forward(&data.inputs).output);
    let report = TrainReport { iterations: config.iterations, checkpoints, output };

    info!("training done, final mean abs error {}", MaeLoss::between(&report.output, &data.targets));
    match serde_json::to_string(&report) {
        Ok(json) => debug!("report: {json}"),
        Err(e) => debug!("report not serializable: {e}"),
    }

    report
}
