//! Gamma matrices for Clifford algebras of signature (p,q).
//!
//! Builds matrix representations of the Clifford generators over the
//! Gaussian integers by recursive tensor products of Pauli matrices, as
//! input data for noncommutative-geometry (fuzzy spectral triple) models.
//!
//! Zero I/O. All arithmetic is exact.

pub mod algebra;
pub mod clifford;
pub mod constants;
pub mod error;
pub mod gaussian;
pub mod matrix;
pub mod params;
pub mod pauli;

pub use algebra::{CliffordAlgebra, RelationFailure, SignatureReport};
pub use clifford::{
    euclidean_gamma5_prefactor, euclidean_gammas, euclidean_gammas_with_prefactor,
    is_verified_dimension, matrix_dimension, signed_gammas,
};
pub use constants::VERIFIED_MAX_DIMENSION;
pub use error::{MatrixError, ParseGaussianError, Result};
pub use gaussian::GaussianInt;
pub use matrix::GammaMatrix;
pub use params::ModelParameters;
pub use pauli::{PAULI, PauliMatrices};
