use crate::{
    data::Dataset,
    network::network::{Activations, Gradients, Network},
    optim::sgd::Sgd,
};

/// What one training iteration computed. The activations and gradients are
/// from before the weights were updated.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub activations: Activations,
    pub gradients: Gradients,
}

/// One full-batch iteration: forward, backward, then update `network` in place.
pub fn train_step(network: &mut Network, data: &Dataset, optimizer: &Sgd) -> StepOutcome {
    let activations = network.forward(&data.inputs);
    let gradients = network.backward(&data.targets, &activations);

    // Both corrections use the pre-update weights.
    let updates = Network::weight_updates(&data.inputs, &activations, &gradients);
    optimizer.step(network, &updates);

    StepOutcome { activations, gradients }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix;

    #[test]
    fn step_keeps_weight_shapes_and_changes_weights() {
        let mut net = Network::seeded(1);
        let before = net.clone();
        let out = train_step(&mut net, &Dataset::xor(), &Sgd::default());

        assert_eq!(net.syn0.shape(), (3, 4));
        assert_eq!(net.syn1.shape(), (4, 1));
        assert_ne!(net, before);
        assert_eq!(out.activations, before.forward(&Dataset::xor().inputs));
    }

    #[test]
    fn step_applies_exactly_the_computed_updates() {
        let data = Dataset::xor();
        let mut net = Network::seeded(2);
        let before = net.clone();
        let out = train_step(&mut net, &data, &Sgd::default());

        let upd = Network::weight_updates(&data.inputs, &out.activations, &out.gradients);
        assert_eq!(net.syn0, &before.syn0 + &upd.syn0);
        assert_eq!(net.syn1, &before.syn1 + &upd.syn1);
    }

    #[test]
    fn targets_equal_to_output_leave_weights_unchanged() {
        let mut net = Network::seeded(1);
        let inputs = Dataset::xor().inputs;
        let targets: Matrix = net.forward(&inputs).output;
        let data = Dataset::new(inputs, targets).unwrap();
        let before = net.clone();

        let out = train_step(&mut net, &data, &Sgd::default());

        assert!(out.gradients.output_error.iter().all(|&e| e == 0.0));
        assert_eq!(net, before);
    }
}
