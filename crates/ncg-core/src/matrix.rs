use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};
use crate::gaussian::GaussianInt;

/// Square matrix over the Gaussian integers, stored row-major.
///
/// The dimension is fixed at construction. Binary operations that need equal
/// dimensions return [`MatrixError::SizeMismatch`] instead of a matrix, and
/// an entry that would leave the `i64` range gives [`MatrixError::Overflow`].
/// Every operation returns a fresh value and leaves its operands alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GammaMatrix {
    size: usize,
    entries: Vec<GaussianInt>,
}

impl GammaMatrix {
    /// Zero matrix without the `size >= 1` check. The N² entry count is
    /// checked and allocated fallibly.
    fn blank(size: usize) -> Result<Self> {
        let too_large = || MatrixError::TooLarge { size };
        let len = size.checked_mul(size).ok_or_else(too_large)?;
        let mut entries = Vec::new();
        entries.try_reserve_exact(len).map_err(|_| too_large())?;
        entries.resize(len, GaussianInt::ZERO);
        Ok(Self { size, entries })
    }

    fn unit(size: usize) -> Result<Self> {
        let mut m = Self::blank(size)?;
        for i in 0..size {
            m[(i, i)] = GaussianInt::ONE;
        }
        Ok(m)
    }

    /// Fixed-size literal, used for compile-time constant matrices.
    pub(crate) fn from_rows<const N: usize>(rows: [[GaussianInt; N]; N]) -> Self {
        Self {
            size: N,
            entries: rows.into_iter().flatten().collect(),
        }
    }

    /// `size`×`size` zero matrix.
    pub fn zeros(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        Self::blank(size)
    }

    /// `size`×`size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        Self::unit(size)
    }

    /// Build from a flat row-major list. The length must be a non-zero
    /// perfect square; the dimension is its square root.
    pub fn from_literal<T, I>(values: I) -> Result<Self>
    where
        T: Into<GaussianInt>,
        I: IntoIterator<Item = T>,
    {
        let entries: Vec<GaussianInt> = values.into_iter().map(Into::into).collect();
        let len = entries.len();
        if len == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let size = len.isqrt();
        if size * size != len {
            return Err(MatrixError::Dimension { len });
        }
        Ok(Self { size, entries })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all entries.
    pub fn entries(&self) -> &[GaussianInt] {
        &self.entries
    }

    /// Entry at (row, col). Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> GaussianInt {
        self[(row, col)]
    }

    /// Overwrite entry at (row, col). Panics when out of range.
    pub fn set(&mut self, row: usize, col: usize, value: GaussianInt) {
        self[(row, col)] = value;
    }

    fn check_same(&self, op: &'static str, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                op,
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }

    /// Replace this matrix's entries with `other`'s. Dimensions must agree.
    pub fn try_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same("assign", other)?;
        self.entries.copy_from_slice(&other.entries);
        Ok(())
    }

    fn zip_with(
        &self,
        op: &'static str,
        other: &Self,
        f: impl Fn(GaussianInt, GaussianInt) -> Option<GaussianInt>,
    ) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(&a, &b)| f(a, b).ok_or(MatrixError::Overflow { op }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            size: self.size,
            entries,
        })
    }

    fn map(
        &self,
        op: &'static str,
        f: impl Fn(GaussianInt) -> Option<GaussianInt>,
    ) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|&a| f(a).ok_or(MatrixError::Overflow { op }))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            size: self.size,
            entries,
        })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same("add", other)?;
        self.zip_with("add", other, GaussianInt::checked_add)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same("subtract", other)?;
        self.zip_with("subtract", other, GaussianInt::checked_sub)
    }

    /// Plain O(N³) product. Sizes already checked.
    fn product(&self, op: &'static str, other: &Self) -> Result<Self> {
        let overflow = || MatrixError::Overflow { op };
        let n = self.size;
        let mut c = Self::blank(n)?;
        for i in 0..n {
            for k in 0..n {
                let a = self[(i, k)];
                if a.is_zero() {
                    continue;
                }
                for j in 0..n {
                    let term = a.checked_mul(other[(k, j)]).ok_or_else(overflow)?;
                    c[(i, j)] = c[(i, j)].checked_add(term).ok_or_else(overflow)?;
                }
            }
        }
        Ok(c)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same("multiply", other)?;
        self.product("multiply", other)
    }

    /// Multiply every entry by `c`.
    pub fn scale(&self, c: GaussianInt) -> Result<Self> {
        self.map("scale", |a| c.checked_mul(a))
    }

    pub fn negate(&self) -> Result<Self> {
        self.map("negate", GaussianInt::checked_neg)
    }

    /// Exact elementwise division by an integer. Fails on a zero divisor, on
    /// the first entry that leaves a remainder, or on `i64::MIN / -1`.
    pub fn div_int(&self, c: i64) -> Result<Self> {
        if c == 0 {
            return Err(MatrixError::DivisionByZero);
        }
        let mut entries = Vec::with_capacity(self.entries.len());
        for (idx, &a) in self.entries.iter().enumerate() {
            match a.checked_div_int(c) {
                Some(q) => entries.push(q),
                // -1 divides everything, so only the quotient can fail
                None if c == -1 => return Err(MatrixError::Overflow { op: "divide" }),
                None => {
                    return Err(MatrixError::Indivisible {
                        row: idx / self.size,
                        col: idx % self.size,
                        divisor: c,
                    });
                }
            }
        }
        Ok(Self {
            size: self.size,
            entries,
        })
    }

    /// Kronecker product. Entry (i·m + ii, j·m + jj) is A(i,j)·B(ii,jj) where
    /// m is the dimension of `other`. Any two dimensions combine.
    pub fn kron(&self, other: &Self) -> Result<Self> {
        let overflow = || MatrixError::Overflow { op: "kron" };
        let (na, nb) = (self.size, other.size);
        let mut c = Self::blank(na.checked_mul(nb).ok_or_else(overflow)?)?;
        for i in 0..na {
            for j in 0..na {
                let a = self[(i, j)];
                if a.is_zero() {
                    continue;
                }
                for ii in 0..nb {
                    for jj in 0..nb {
                        c[(i * nb + ii, j * nb + jj)] =
                            a.checked_mul(other[(ii, jj)]).ok_or_else(overflow)?;
                    }
                }
            }
        }
        Ok(c)
    }

    /// AB − BA
    pub fn commutator(&self, other: &Self) -> Result<Self> {
        self.check_same("commutator", other)?;
        let ab = self.product("commutator", other)?;
        let ba = other.product("commutator", self)?;
        ab.zip_with("commutator", &ba, GaussianInt::checked_sub)
    }

    /// AB + BA
    pub fn anticommutator(&self, other: &Self) -> Result<Self> {
        self.check_same("anticommutator", other)?;
        let ab = self.product("anticommutator", other)?;
        let ba = other.product("anticommutator", self)?;
        ab.zip_with("anticommutator", &ba, GaussianInt::checked_add)
    }

    pub fn trace(&self) -> Result<GaussianInt> {
        (0..self.size).try_fold(GaussianInt::ZERO, |acc, i| {
            acc.checked_add(self[(i, i)])
                .ok_or(MatrixError::Overflow { op: "trace" })
        })
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|a| a.is_zero())
    }

    /// c on the diagonal, zero elsewhere.
    fn is_scalar(&self, c: GaussianInt) -> bool {
        self.entries.iter().enumerate().all(|(idx, &a)| {
            let on_diagonal = idx / self.size == idx % self.size;
            a == if on_diagonal { c } else { GaussianInt::ZERO }
        })
    }

    /// M·M = I. This is the square test used for Clifford generators, not a
    /// conjugate-symmetry test; see [`GammaMatrix::is_hermitian`] for that.
    /// A square that overflows is not I.
    pub fn is_involution(&self) -> bool {
        self.product("square", self)
            .is_ok_and(|sq| sq.is_scalar(GaussianInt::ONE))
    }

    /// M·M = −I.
    pub fn is_anti_involution(&self) -> bool {
        self.product("square", self)
            .is_ok_and(|sq| sq.is_scalar(GaussianInt::MINUS_ONE))
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Result<Self> {
        let n = self.size;
        let mut out = Self::blank(n)?;
        for i in 0..n {
            for j in 0..n {
                out[(j, i)] = self[(i, j)]
                    .checked_conj()
                    .ok_or(MatrixError::Overflow { op: "dagger" })?;
            }
        }
        Ok(out)
    }

    /// M = M†.
    pub fn is_hermitian(&self) -> bool {
        self.dagger().is_ok_and(|d| d == *self)
    }
}

impl Index<(usize, usize)> for GammaMatrix {
    type Output = GaussianInt;

    fn index(&self, (row, col): (usize, usize)) -> &GaussianInt {
        assert!(row < self.size && col < self.size, "index ({row},{col}) out of range");
        &self.entries[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for GammaMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut GaussianInt {
        assert!(row < self.size && col < self.size, "index ({row},{col}) out of range");
        &mut self.entries[row * self.size + col]
    }
}

/// One row per line, each entry right-aligned behind a separating space.
impl fmt::Display for GammaMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.entries.chunks(self.size) {
            for entry in row {
                write!(f, " {entry:>2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
