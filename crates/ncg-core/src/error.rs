use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Binary operation on matrices of different dimension.
    SizeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    /// Flat literal whose length is not a perfect square.
    Dimension { len: usize },
    /// Matrix of dimension zero.
    EmptyMatrix,
    DivisionByZero,
    /// Exact division left a remainder at (row, col).
    Indivisible { row: usize, col: usize, divisor: i64 },
    /// An entry left the `i64` range during `op`.
    Overflow { op: &'static str },
    /// N² entries cannot be counted or allocated.
    TooLarge { size: usize },
    /// Clifford algebra with p + q = 0.
    EmptySignature,
    /// 2^⌊d/2⌋ does not fit in a `usize`.
    SignatureTooLarge { d: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::SizeMismatch { op, left, right } => {
                write!(f, "{op}: matrices have different sizes ({left} vs {right})")
            }
            MatrixError::Dimension { len } => {
                write!(f, "literal of length {len} is not a perfect square")
            }
            MatrixError::EmptyMatrix => write!(f, "matrix dimension must be at least 1"),
            MatrixError::DivisionByZero => write!(f, "division by zero"),
            MatrixError::Indivisible { row, col, divisor } => {
                write!(f, "entry ({row},{col}) is not divisible by {divisor}")
            }
            MatrixError::Overflow { op } => write!(f, "{op}: integer overflow"),
            MatrixError::TooLarge { size } => {
                write!(f, "cannot allocate a {size}x{size} matrix")
            }
            MatrixError::EmptySignature => {
                write!(f, "signature (p,q) must have p + q >= 1")
            }
            MatrixError::SignatureTooLarge { d } => {
                write!(f, "d = {d}: matrix dimension 2^{} is not representable", d / 2)
            }
        }
    }
}

impl std::error::Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Text that does not describe a Gaussian integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGaussianError(pub String);

impl fmt::Display for ParseGaussianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid Gaussian integer: {:?}", self.0)
    }
}

impl std::error::Error for ParseGaussianError {}
