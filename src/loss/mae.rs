use crate::math::matrix::Matrix;

/// Mean absolute error. Only reported, never differentiated: the update rule
/// works on the signed error from `output_error`.
pub struct MaeLoss;

impl MaeLoss {
    /// Scalar MAE over a matrix of signed errors: mean(|e|)
    pub fn loss(errors: &Matrix) -> f64 {
        errors.mean_abs()
    }

    /// Scalar MAE between two outputs: mean(|predicted - expected|)
    pub fn between(predicted: &Matrix, expected: &Matrix) -> f64 {
        MaeLoss::loss(&output_error(expected, predicted))
    }
}

/// Signed error `targets - output`, element-wise.
pub fn output_error(targets: &Matrix, output: &Matrix) -> Matrix {
    targets - output
}
