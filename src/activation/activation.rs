use crate::math::matrix::Matrix;

/// The logistic nonlinearity shared by the hidden and output layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`, mapping any real into `(0, 1)`.
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    /// Slope of the sigmoid written in terms of its own output `y`, i.e.
    /// `y * (1 - y)`.
    ///
    /// `y` must already be an activation. Passing a raw pre-activation gives a
    /// meaningless number.
    pub fn derivative(y: f64) -> f64 {
        y * (1.0 - y)
    }

    pub fn apply(m: &Matrix) -> Matrix {
        m.map(Sigmoid::function)
    }

    /// Element-wise `derivative` over a matrix of activations.
    pub fn derivative_of(activations: &Matrix) -> Matrix {
        activations.map(Sigmoid::derivative)
    }
}

/// Scalar form with a `deriv` switch: the sigmoid of `x`, or, when `deriv` is
/// set, the slope `x * (1 - x)` of an already activated `x`.
pub fn nonlin(x: f64, deriv: bool) -> f64 {
    if deriv {
        Sigmoid::derivative(x)
    } else {
        Sigmoid::function(x)
    }
}
