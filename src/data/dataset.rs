use crate::math::{Matrix, ShapeError};

/// Input rows and their targets. The last input column is the constant bias
/// feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl Dataset {
    /// Pairs inputs with targets; both need one row per example.
    pub fn new(inputs: Matrix, targets: Matrix) -> Result<Dataset, ShapeError> {
        if inputs.rows != targets.rows {
            return Err(ShapeError::Mismatch {
                op: "pair inputs with targets",
                lhs: inputs.shape(),
                rhs: targets.shape(),
            });
        }
        Ok(Dataset { inputs, targets })
    }

    /// The exclusive-OR truth table with a bias column of ones.
    pub fn xor() -> Dataset {
        let inputs = Matrix {
            rows: 4,
            cols: 3,
            data: vec![
                vec![0.0, 0.0, 1.0],
                vec![0.0, 1.0, 1.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 1.0],
            ],
        };
        let targets = Matrix::column(&[0.0, 1.0, 1.0, 0.0]);
        Dataset { inputs, targets }
    }

    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_table_has_bias_column_and_xor_targets() {
        let d = Dataset::xor();
        assert_eq!(d.inputs.shape(), (4, 3));
        assert_eq!(d.targets.shape(), (4, 1));
        for (row, target) in d.inputs.data.iter().zip(d.targets.data.iter()) {
            assert_eq!(row[2], 1.0);
            let xor = (row[0] != row[1]) as u8 as f64;
            assert_eq!(target[0], xor);
        }
    }

    #[test]
    fn new_rejects_row_count_mismatch() {
        let err = Dataset::new(Matrix::zeros(4, 3), Matrix::zeros(3, 1)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Mismatch { op: "pair inputs with targets", lhs: (4, 3), rhs: (3, 1) }
        );
    }
}
