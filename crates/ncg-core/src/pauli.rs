use std::sync::LazyLock;

use crate::gaussian::GaussianInt;
use crate::matrix::GammaMatrix;

const O: GaussianInt = GaussianInt::ZERO;
const ONE: GaussianInt = GaussianInt::ONE;
const I: GaussianInt = GaussianInt::I;
const MINUS_ONE: GaussianInt = GaussianInt::MINUS_ONE;
const MINUS_I: GaussianInt = GaussianInt::MINUS_I;

/// The three 2×2 Pauli matrices seeding the gamma matrix recursion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PauliMatrices {
    /// [[0, 1], [1, 0]]
    pub sigma1: GammaMatrix,
    /// [[0, -i], [i, 0]]
    pub sigma2: GammaMatrix,
    /// [[1, 0], [0, -1]]
    pub sigma3: GammaMatrix,
}

impl PauliMatrices {
    pub fn new() -> Self {
        Self {
            sigma1: GammaMatrix::from_rows([[O, ONE], [ONE, O]]),
            sigma2: GammaMatrix::from_rows([[O, MINUS_I], [I, O]]),
            sigma3: GammaMatrix::from_rows([[ONE, O], [O, MINUS_ONE]]),
        }
    }
}

impl Default for PauliMatrices {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared instance, built on first use.
pub static PAULI: LazyLock<PauliMatrices> = LazyLock::new(PauliMatrices::new);
