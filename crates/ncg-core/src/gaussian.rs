use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ParseGaussianError;

/// Complex number with integer components, a + bi.
///
/// All arithmetic is exact and checked: every operation returns `None`
/// instead of wrapping when a component leaves the `i64` range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GaussianInt {
    pub re: i64,
    pub im: i64,
}

impl GaussianInt {
    pub const ZERO: Self = Self { re: 0, im: 0 };
    pub const ONE: Self = Self { re: 1, im: 0 };
    pub const MINUS_ONE: Self = Self { re: -1, im: 0 };
    /// Imaginary unit (0, 1).
    pub const I: Self = Self { re: 0, im: 1 };
    pub const MINUS_I: Self = Self { re: 0, im: -1 };

    pub const fn new(re: i64, im: i64) -> Self {
        Self { re, im }
    }

    pub const fn real(re: i64) -> Self {
        Self { re, im: 0 }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Complex conjugate. `None` when `-im` does not fit in an `i64`.
    pub fn checked_conj(self) -> Option<Self> {
        Some(Self {
            re: self.re,
            im: self.im.checked_neg()?,
        })
    }

    /// Squared modulus re² + im², `None` on overflow.
    pub fn checked_norm(self) -> Option<i64> {
        let wide = i128::from(self.re).pow(2) + i128::from(self.im).pow(2);
        i64::try_from(wide).ok()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            re: self.re.checked_add(rhs.re)?,
            im: self.im.checked_add(rhs.im)?,
        })
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self {
            re: self.re.checked_sub(rhs.re)?,
            im: self.im.checked_sub(rhs.im)?,
        })
    }

    /// (a + bi)(c + di) = (ac − bd) + (ad + bc)i, `None` when either
    /// component leaves the `i64` range. Intermediates are `i128`.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (a, b) = (i128::from(self.re), i128::from(self.im));
        let (c, d) = (i128::from(rhs.re), i128::from(rhs.im));
        Some(Self {
            re: i64::try_from(a * c - b * d).ok()?,
            im: i64::try_from(a * d + b * c).ok()?,
        })
    }

    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            re: self.re.checked_neg()?,
            im: self.im.checked_neg()?,
        })
    }

    /// Exact division by an integer. `None` if `c` is zero, either
    /// component is not a multiple of `c`, or the quotient overflows
    /// (`i64::MIN / -1`).
    pub fn checked_div_int(self, c: i64) -> Option<Self> {
        if self.re.checked_rem(c)? != 0 || self.im.checked_rem(c)? != 0 {
            return None;
        }
        Some(Self {
            re: self.re.checked_div(c)?,
            im: self.im.checked_div(c)?,
        })
    }
}

impl From<i64> for GaussianInt {
    fn from(re: i64) -> Self {
        Self::real(re)
    }
}

/// Units and zero print symbolically (`0`, `1`, `-1`, `i`, `-i`), anything
/// else as the raw `(re,im)` pair.
impl fmt::Display for GaussianInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.re, self.im) {
            (0, 0) => "0",
            (1, 0) => "1",
            (-1, 0) => "-1",
            (0, 1) => "i",
            (0, -1) => "-i",
            (re, im) => return f.pad(&format!("({re},{im})")),
        };
        f.pad(text)
    }
}

/// Accepts `i`, `-i`, `3i`, plain integers, `re,im` and `(re,im)`.
impl FromStr for GaussianInt {
    type Err = ParseGaussianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseGaussianError(s.to_string());
        let text = s.trim();
        let text = text
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(text);

        if let Some((re, im)) = text.split_once(',') {
            let re = re.trim().parse::<i64>().map_err(|_| err())?;
            let im = im.trim().parse::<i64>().map_err(|_| err())?;
            return Ok(Self::new(re, im));
        }

        if let Some(coeff) = text.strip_suffix('i') {
            let im = match coeff.trim() {
                "" | "+" => 1,
                "-" => -1,
                n => n.parse::<i64>().map_err(|_| err())?,
            };
            return Ok(Self::new(0, im));
        }

        text.parse::<i64>().map(Self::real).map_err(|_| err())
    }
}

/// Config files may write a prefactor as text (`"i"`), a bare integer, or
/// an explicit `{ re, im }` table.
#[derive(Deserialize)]
#[serde(untagged)]
enum GaussianRepr {
    Text(String),
    Int(i64),
    Pair { re: i64, im: i64 },
}

impl<'de> Deserialize<'de> for GaussianInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match GaussianRepr::deserialize(deserializer)? {
            GaussianRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            GaussianRepr::Int(re) => Ok(Self::real(re)),
            GaussianRepr::Pair { re, im } => Ok(Self::new(re, im)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gaussian() -> impl Strategy<Value = GaussianInt> {
        (-50i64..50, -50i64..50).prop_map(|(re, im)| GaussianInt::new(re, im))
    }

    #[test]
    fn test_i_squared_is_minus_one() {
        assert_eq!(
            GaussianInt::I.checked_mul(GaussianInt::I),
            Some(GaussianInt::MINUS_ONE)
        );
    }

    #[test]
    fn test_product() {
        let a = GaussianInt::new(2, 3);
        let b = GaussianInt::new(-1, 4);
        // (2 + 3i)(-1 + 4i) = -2 + 8i - 3i - 12 = -14 + 5i
        assert_eq!(a.checked_mul(b), Some(GaussianInt::new(-14, 5)));
    }

    #[test]
    fn test_conj_norm() {
        let z = GaussianInt::new(3, -4);
        assert_eq!(z.checked_norm(), Some(25));
        assert_eq!(
            z.checked_mul(z.checked_conj().unwrap()),
            Some(GaussianInt::real(25))
        );
    }

    #[test]
    fn test_checked_div_int() {
        assert_eq!(
            GaussianInt::new(4, -6).checked_div_int(2),
            Some(GaussianInt::new(2, -3))
        );
        assert_eq!(GaussianInt::new(3, 2).checked_div_int(2), None);
        assert_eq!(GaussianInt::ONE.checked_div_int(0), None);
    }

    #[test]
    fn test_div_min_by_minus_one() {
        assert_eq!(GaussianInt::real(i64::MIN).checked_div_int(-1), None);
        assert_eq!(GaussianInt::new(0, i64::MIN).checked_div_int(-1), None);
        assert_eq!(
            GaussianInt::real(i64::MIN).checked_div_int(1),
            Some(GaussianInt::real(i64::MIN))
        );
    }

    #[test]
    fn test_overflow_is_none() {
        let max = GaussianInt::real(i64::MAX);
        let min = GaussianInt::real(i64::MIN);
        assert_eq!(max.checked_add(GaussianInt::ONE), None);
        assert_eq!(min.checked_sub(GaussianInt::ONE), None);
        assert_eq!(min.checked_neg(), None);
        assert_eq!(GaussianInt::new(0, i64::MIN).checked_conj(), None);
        assert_eq!(min.checked_norm(), None);
        // MIN · (−i) = −MIN·i, whose imaginary part is 2^63
        assert_eq!(min.checked_mul(GaussianInt::MINUS_I), None);
        assert_eq!(
            min.checked_mul(GaussianInt::I),
            Some(GaussianInt::new(0, i64::MIN))
        );
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(GaussianInt::ZERO.to_string(), "0");
        assert_eq!(GaussianInt::ONE.to_string(), "1");
        assert_eq!(GaussianInt::MINUS_ONE.to_string(), "-1");
        assert_eq!(GaussianInt::I.to_string(), "i");
        assert_eq!(GaussianInt::MINUS_I.to_string(), "-i");
        assert_eq!(GaussianInt::new(2, 0).to_string(), "(2,0)");
        assert_eq!(GaussianInt::new(1, 1).to_string(), "(1,1)");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>2}", GaussianInt::ONE), " 1");
        assert_eq!(format!("{:>2}", GaussianInt::MINUS_I), "-i");
    }

    #[test]
    fn test_parse() {
        assert_eq!("i".parse::<GaussianInt>(), Ok(GaussianInt::I));
        assert_eq!("-i".parse::<GaussianInt>(), Ok(GaussianInt::MINUS_I));
        assert_eq!("+i".parse::<GaussianInt>(), Ok(GaussianInt::I));
        assert_eq!("3i".parse::<GaussianInt>(), Ok(GaussianInt::new(0, 3)));
        assert_eq!("-7".parse::<GaussianInt>(), Ok(GaussianInt::real(-7)));
        assert_eq!("1,-2".parse::<GaussianInt>(), Ok(GaussianInt::new(1, -2)));
        assert_eq!(" (0, 1) ".parse::<GaussianInt>(), Ok(GaussianInt::I));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<GaussianInt>().is_err());
        assert!("1+i".parse::<GaussianInt>().is_err());
        assert!("(1,2,3)".parse::<GaussianInt>().is_err());
        assert!("x".parse::<GaussianInt>().is_err());
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(z in gaussian()) {
            prop_assert_eq!(z.to_string().parse::<GaussianInt>(), Ok(z));
        }

        #[test]
        fn prop_mul_commutes(a in gaussian(), b in gaussian()) {
            prop_assert_eq!(a.checked_mul(b), b.checked_mul(a));
        }

        #[test]
        fn prop_distributive(a in gaussian(), b in gaussian(), c in gaussian()) {
            let lhs = a.checked_mul(b.checked_add(c).unwrap());
            let rhs = a.checked_mul(b).unwrap().checked_add(a.checked_mul(c).unwrap());
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn prop_norm_multiplicative(a in gaussian(), b in gaussian()) {
            let product = a.checked_mul(b).unwrap().checked_norm().unwrap();
            prop_assert_eq!(product, a.checked_norm().unwrap() * b.checked_norm().unwrap());
        }
    }
}
