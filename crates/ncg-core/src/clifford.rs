//! Recursive construction of Clifford algebra generators.
//!
//! Euclidean generators of signature (d,0) are built by doubling:
//!
//! - d = 1: `{ 1 }`
//! - d = 2: `{ σ1, σ2 }`
//! - d even: `{ γ_μ ⊗ σ1, 1 ⊗ σ2, 1 ⊗ σ3 }` from the d−2 set
//! - d odd: `{ γ_μ, c·γ_1⋯γ_{d−1} }` from the d−1 set
//!
//! Signature (p,q) multiplies the last q Euclidean generators by i.

use crate::constants::VERIFIED_MAX_DIMENSION;
use crate::error::{MatrixError, Result};
use crate::gaussian::GaussianInt;
use crate::matrix::GammaMatrix;
use crate::pauli::PAULI;

/// Dimension of each generator for d = p + q: 2^⌊d/2⌋, or `None` when
/// that does not fit in a `usize`.
pub fn matrix_dimension(d: usize) -> Option<usize> {
    u32::try_from(d / 2)
        .ok()
        .and_then(|k| 1usize.checked_shl(k))
}

/// Whether the construction for `d` lies inside the hand-checked range.
pub fn is_verified_dimension(d: usize) -> bool {
    (1..=VERIFIED_MAX_DIMENSION).contains(&d)
}

/// Phase c for which c·γ_1⋯γ_{d−1} squares to +1 in odd d.
///
/// The product of n = d−1 anticommuting involutions squares to
/// (−1)^(n(n−1)/2), so c = 1 when that exponent is even and c = i otherwise.
/// Even d and d = 1 never use the prefactor; they get 1.
pub fn euclidean_gamma5_prefactor(d: usize) -> GaussianInt {
    if d < 3 || d % 2 == 0 {
        return GaussianInt::ONE;
    }
    // n(n−1)/2 is even exactly when n ≡ 0, 1 (mod 4)
    if matches!((d - 1) % 4, 0 | 1) {
        GaussianInt::ONE
    } else {
        GaussianInt::I
    }
}

/// Euclidean generators with no gamma5 prefactor. For odd d ≥ 3 the last
/// generator is the zero matrix; use
/// [`euclidean_gammas_with_prefactor`] when it has to mean something.
pub fn euclidean_gammas(d: usize) -> Result<Vec<GammaMatrix>> {
    euclidean_gammas_with_prefactor(d, GaussianInt::ZERO)
}

/// The d Euclidean generators of signature (d,0), each of dimension
/// [`matrix_dimension`]`(d)`. `prefactor` scales the gamma5 added in odd d.
///
/// Fails up front with [`MatrixError::SignatureTooLarge`] or
/// [`MatrixError::TooLarge`] when the generators could not be addressed.
pub fn euclidean_gammas_with_prefactor(
    d: usize,
    prefactor: GaussianInt,
) -> Result<Vec<GammaMatrix>> {
    let size = matrix_dimension(d).ok_or(MatrixError::SignatureTooLarge { d })?;
    if size.checked_mul(size).is_none() {
        return Err(MatrixError::TooLarge { size });
    }

    match d {
        0 => Err(MatrixError::EmptySignature),
        1 => Ok(vec![GammaMatrix::identity(1)?]),
        2 => Ok(vec![PAULI.sigma1.clone(), PAULI.sigma2.clone()]),
        d if d % 2 == 0 => {
            let small = euclidean_gammas_with_prefactor(d - 2, prefactor)?;
            let one = GammaMatrix::identity(size / 2)?;

            let mut gammas = small
                .iter()
                .map(|g| g.kron(&PAULI.sigma1))
                .collect::<Result<Vec<_>>>()?;
            gammas.push(one.kron(&PAULI.sigma2)?);
            gammas.push(one.kron(&PAULI.sigma3)?);
            Ok(gammas)
        }
        d => {
            let mut gammas = euclidean_gammas_with_prefactor(d - 1, prefactor)?;
            let (first, rest) = gammas
                .split_first()
                .ok_or(MatrixError::EmptySignature)?;
            let product = rest
                .iter()
                .try_fold(first.clone(), |acc, g| acc.try_mul(g))?;
            gammas.push(product.scale(prefactor)?);
            Ok(gammas)
        }
    }
}

/// Generators of signature (p,q): the Euclidean (p+q,0) set with the last
/// q elements multiplied by i. The first p are left untouched.
pub fn signed_gammas(p: usize, q: usize, prefactor: GaussianInt) -> Result<Vec<GammaMatrix>> {
    let mut gammas = euclidean_gammas_with_prefactor(p.saturating_add(q), prefactor)?;
    for gamma in &mut gammas[p..] {
        *gamma = gamma.scale(GaussianInt::I)?;
    }
    Ok(gammas)
}
