use crate::clifford::euclidean_gamma5_prefactor;
use crate::gaussian::GaussianInt;

/// Signature (p,q) of a Clifford algebra plus the phase used for the odd
/// dimensional gamma5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelParameters {
    pub p: usize,
    pub q: usize,
    pub gamma5_prefactor: GaussianInt,
}

impl ModelParameters {
    /// Signature (p,q) with the prefactor that makes the Euclidean gamma5
    /// square to +1.
    pub fn new(p: usize, q: usize) -> Self {
        Self {
            p,
            q,
            gamma5_prefactor: euclidean_gamma5_prefactor(p.saturating_add(q)),
        }
    }

    pub fn with_gamma5_prefactor(mut self, prefactor: GaussianInt) -> Self {
        self.gamma5_prefactor = prefactor;
        self
    }

    /// Number of generators, p + q. Saturates at `usize::MAX`, which no
    /// generator set can reach anyway.
    pub fn d(&self) -> usize {
        self.p.saturating_add(self.q)
    }

    pub fn signature(&self) -> (usize, usize) {
        (self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_euclidean_prefactor() {
        let params = ModelParameters::new(1, 2);
        assert_eq!(params.d(), 3);
        assert_eq!(params.signature(), (1, 2));
        assert_eq!(params.gamma5_prefactor, GaussianInt::I);
        assert_eq!(ModelParameters::new(0, 4).gamma5_prefactor, GaussianInt::ONE);
    }

    #[test]
    fn test_override_prefactor() {
        let params = ModelParameters::new(3, 0).with_gamma5_prefactor(GaussianInt::real(2));
        assert_eq!(params.gamma5_prefactor, GaussianInt::real(2));
        assert_eq!(params.p, 3);
    }

    #[test]
    fn test_huge_signature_saturates() {
        let params = ModelParameters::new(usize::MAX, 2);
        assert_eq!(params.d(), usize::MAX);
        assert_eq!(params.gamma5_prefactor, GaussianInt::I);
    }
}
