use rand::RngCore;
use serde::{Serialize, Deserialize};

use crate::activation::activation::Sigmoid;
use crate::loss::mae::output_error;
use crate::math::{Matrix, Mt, ShapeError};

/// Input features per example, bias column included.
pub const INPUT_SIZE: usize = 3;
/// Units in the hidden layer.
pub const HIDDEN_SIZE: usize = 4;
/// Units in the output layer.
pub const OUTPUT_SIZE: usize = 1;

/// The whole training state: both synapse layers.
///
/// - `syn0` maps the `INPUT_SIZE` features to the hidden units (3x4)
/// - `syn1` maps the hidden units to the output unit (4x1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub syn0: Matrix,
    pub syn1: Matrix,
}

/// Layer outputs of one forward pass. `hidden` is examples x hidden units,
/// `output` is examples x 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    pub hidden: Matrix,
    pub output: Matrix,
}

/// Errors and deltas of one backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub output_error: Matrix,
    pub output_delta: Matrix,
    pub hidden_error: Matrix,
    pub hidden_delta: Matrix,
}

/// Unscaled additive corrections, one per synapse layer and of the same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightUpdates {
    pub syn0: Matrix,
    pub syn1: Matrix,
}

impl Network {
    /// Draws `syn0` then `syn1` from `rng`, each row-major, uniformly in `[-1, 1)`.
    pub fn new<R: RngCore + ?Sized>(rng: &mut R) -> Network {
        let syn0 = Matrix::random_uniform(INPUT_SIZE, HIDDEN_SIZE, rng);
        let syn1 = Matrix::random_uniform(HIDDEN_SIZE, OUTPUT_SIZE, rng);
        Network { syn0, syn1 }
    }

    /// Initializes from a Mersenne Twister seeded with `seed`.
    pub fn seeded(seed: u32) -> Network {
        Network::new(&mut Mt::new(seed))
    }

    /// Wraps existing weights after checking both shapes.
    pub fn from_weights(syn0: Matrix, syn1: Matrix) -> Result<Network, ShapeError> {
        if syn0.shape() != (INPUT_SIZE, HIDDEN_SIZE) {
            return Err(ShapeError::Mismatch {
                op: "use as input-to-hidden weights",
                lhs: syn0.shape(),
                rhs: (INPUT_SIZE, HIDDEN_SIZE),
            });
        }
        if syn1.shape() != (HIDDEN_SIZE, OUTPUT_SIZE) {
            return Err(ShapeError::Mismatch {
                op: "use as hidden-to-output weights",
                lhs: syn1.shape(),
                rhs: (HIDDEN_SIZE, OUTPUT_SIZE),
            });
        }
        Ok(Network { syn0, syn1 })
    }

    /// hidden = σ(inputs · syn0), output = σ(hidden · syn1)
    pub fn forward(&self, inputs: &Matrix) -> Activations {
        let hidden = Sigmoid::apply(&(inputs * &self.syn0));
        let output = Sigmoid::apply(&(&hidden * &self.syn1));
        Activations { hidden, output }
    }

    /// Chain rule through both layers, using the current `syn1`.
    pub fn backward(&self, targets: &Matrix, activations: &Activations) -> Gradients {
        let output_error = output_error(targets, &activations.output);
        let output_delta = output_error.hadamard(&Sigmoid::derivative_of(&activations.output));

        let hidden_error = &output_delta * &self.syn1.transpose();
        let hidden_delta = hidden_error.hadamard(&Sigmoid::derivative_of(&activations.hidden));

        Gradients { output_error, output_delta, hidden_error, hidden_delta }
    }

    /// syn1 += hiddenᵀ · output_delta, syn0 += inputsᵀ · hidden_delta
    pub fn weight_updates(
        inputs: &Matrix,
        activations: &Activations,
        gradients: &Gradients,
    ) -> WeightUpdates {
        WeightUpdates {
            syn0: &inputs.transpose() * &gradients.hidden_delta,
            syn1: &activations.hidden.transpose() * &gradients.output_delta,
        }
    }

    /// Output for a single example; `row` carries the bias feature too.
    pub fn predict(&self, row: &[f64]) -> Result<f64, ShapeError> {
        let input = Matrix::from_data(vec![row.to_vec()])?;
        if input.cols != INPUT_SIZE {
            return Err(ShapeError::Mismatch {
                op: "feed",
                lhs: input.shape(),
                rhs: self.syn0.shape(),
            });
        }
        Ok(self.forward(&input).output.data[0][0])
    }
}
