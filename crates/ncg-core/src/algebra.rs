use std::fmt;

use crate::clifford::signed_gammas;
use crate::error::Result;
use crate::matrix::GammaMatrix;
use crate::params::ModelParameters;

/// Gamma matrices of signature (p,q), generated once from the model
/// parameters and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliffordAlgebra {
    params: ModelParameters,
    gammas: Vec<GammaMatrix>,
}

impl CliffordAlgebra {
    pub fn new(params: ModelParameters) -> Result<Self> {
        let gammas = signed_gammas(params.p, params.q, params.gamma5_prefactor)?;
        Ok(Self { params, gammas })
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Generators in construction order: the p squaring to +1, then the q
    /// squaring to −1.
    pub fn gammas(&self) -> &[GammaMatrix] {
        &self.gammas
    }

    /// Generator by 1-based index, as printed.
    pub fn gamma(&self, k: usize) -> Option<&GammaMatrix> {
        k.checked_sub(1).and_then(|i| self.gammas.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GammaMatrix> {
        self.gammas.iter()
    }

    pub fn len(&self) -> usize {
        self.gammas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gammas.is_empty()
    }

    /// Dimension shared by every generator.
    pub fn matrix_dimension(&self) -> usize {
        self.gammas.first().map_or(0, GammaMatrix::size)
    }

    /// Check the defining relations: γ_k² = +1 for the first p, γ_k² = −1
    /// for the last q, and γ_j γ_k + γ_k γ_j = 0 for j ≠ k.
    pub fn verify(&self) -> SignatureReport {
        let mut failures = Vec::new();

        for (i, gamma) in self.gammas.iter().enumerate() {
            let positive = i < self.params.p;
            let ok = if positive {
                gamma.is_involution()
            } else {
                gamma.is_anti_involution()
            };
            if !ok {
                failures.push(RelationFailure::Square {
                    index: i + 1,
                    positive,
                });
            }
        }

        for (i, a) in self.gammas.iter().enumerate() {
            for (j, b) in self.gammas.iter().enumerate().skip(i + 1) {
                let vanishes = a.anticommutator(b).is_ok_and(|m| m.is_zero());
                if !vanishes {
                    failures.push(RelationFailure::Anticommute {
                        left: i + 1,
                        right: j + 1,
                    });
                }
            }
        }

        SignatureReport {
            signature: self.params.signature(),
            failures,
        }
    }
}

impl<'a> IntoIterator for &'a CliffordAlgebra {
    type Item = &'a GammaMatrix;
    type IntoIter = std::slice::Iter<'a, GammaMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.gammas.iter()
    }
}

/// `Gamma k:` followed by the matrix rows and a blank line, per generator.
impl fmt::Display for CliffordAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gamma) in self.gammas.iter().enumerate() {
            writeln!(f, "Gamma {}:", i + 1)?;
            writeln!(f, "{gamma}")?;
        }
        Ok(())
    }
}

/// A Clifford relation that does not hold. Indices are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationFailure {
    Square { index: usize, positive: bool },
    Anticommute { left: usize, right: usize },
}

impl fmt::Display for RelationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationFailure::Square { index, positive } => {
                let sign = if *positive { "+1" } else { "-1" };
                write!(f, "Gamma {index} does not square to {sign}")
            }
            RelationFailure::Anticommute { left, right } => {
                write!(f, "Gamma {left} and Gamma {right} do not anticommute")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureReport {
    pub signature: (usize, usize),
    pub failures: Vec<RelationFailure>,
}

impl SignatureReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, q) = self.signature;
        if self.is_valid() {
            return writeln!(f, "signature ({p},{q}): ok");
        }
        writeln!(
            f,
            "signature ({p},{q}): {} relation(s) violated",
            self.failures.len()
        )?;
        for failure in &self.failures {
            writeln!(f, "  {failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::gaussian::GaussianInt;

    #[test]
    fn test_generation_order_and_access() {
        let algebra = CliffordAlgebra::new(ModelParameters::new(1, 3)).unwrap();
        assert_eq!(algebra.len(), 4);
        assert_eq!(algebra.params().signature(), (1, 3));
        assert!(!algebra.is_empty());
        assert_eq!(algebra.matrix_dimension(), 4);
        assert_eq!(algebra.gamma(0), None);
        assert_eq!(algebra.gamma(5), None);
        assert_eq!(algebra.gamma(1), Some(&algebra.gammas()[0]));
        assert_eq!(algebra.iter().count(), 4);
        assert_eq!((&algebra).into_iter().count(), 4);
        assert!(algebra.gamma(1).unwrap().is_involution());
        assert!(algebra.gamma(4).unwrap().is_anti_involution());
    }

    #[test]
    fn test_empty_signature_fails() {
        assert!(CliffordAlgebra::new(ModelParameters::new(0, 0)).is_err());
    }

    #[test]
    fn test_overflowing_prefactor_fails() {
        let params = ModelParameters::new(3, 0).with_gamma5_prefactor(GaussianInt::real(i64::MIN));
        assert_eq!(
            CliffordAlgebra::new(params),
            Err(MatrixError::Overflow { op: "scale" })
        );
        let params = ModelParameters::new(usize::MAX, 0);
        assert_eq!(
            CliffordAlgebra::new(params),
            Err(MatrixError::SignatureTooLarge { d: usize::MAX })
        );
    }

    #[test]
    fn test_render_2_0() {
        let algebra = CliffordAlgebra::new(ModelParameters::new(2, 0)).unwrap();
        assert_eq!(
            algebra.to_string(),
            "Gamma 1:\n  0  1\n  1  0\n\nGamma 2:\n  0 -i\n  i  0\n\n"
        );
    }

    #[test]
    fn test_render_0_1() {
        let algebra = CliffordAlgebra::new(ModelParameters::new(0, 1)).unwrap();
        assert_eq!(algebra.to_string(), "Gamma 1:\n  i\n\n");
    }

    #[test]
    fn test_render_raw_pair() {
        let params = ModelParameters::new(3, 0).with_gamma5_prefactor(GaussianInt::real(2));
        let algebra = CliffordAlgebra::new(params).unwrap();
        let text = algebra.to_string();
        // 2·σ1σ2 = 2iσ3
        assert!(text.contains("Gamma 3:\n (0,2)  0\n  0 (0,-2)\n"), "{text}");
    }

    #[test]
    fn test_verify_valid() {
        for (p, q) in [(1, 0), (0, 3), (1, 3), (4, 0), (2, 3), (6, 0), (1, 5)] {
            let report = CliffordAlgebra::new(ModelParameters::new(p, q))
                .unwrap()
                .verify();
            assert!(report.is_valid(), "{report}");
            assert_eq!(report.to_string(), format!("signature ({p},{q}): ok\n"));
        }
    }

    #[test]
    fn test_verify_reports_bad_prefactor() {
        let params = ModelParameters::new(3, 0).with_gamma5_prefactor(GaussianInt::ZERO);
        let report = CliffordAlgebra::new(params).unwrap().verify();
        assert!(!report.is_valid());
        assert_eq!(
            report.failures,
            vec![RelationFailure::Square {
                index: 3,
                positive: true
            }]
        );
        assert!(report.to_string().contains("Gamma 3 does not square to +1"));
    }
}
