use crate::network::network::{Network, WeightUpdates};

/// Plain additive update. The default step size of 1.0 applies the
/// corrections unscaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Adds `learning_rate * update` to each synapse layer in place.
    pub fn step(&self, network: &mut Network, updates: &WeightUpdates) {
        network.syn1 += &updates.syn1.scale(self.learning_rate);
        network.syn0 += &updates.syn0.scale(self.learning_rate);
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(1.0)
    }
}
