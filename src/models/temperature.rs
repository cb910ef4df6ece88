use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::{DECIMAL_POINT, MAX_TOKEN_LEN, MINUS_SIGN};

/// Temperature stored as an integer number of tenths of a degree.
///
/// Input carries exactly one fractional digit, so dropping the decimal point
/// from the text gives the scaled value directly. Values outside the usual
/// `-99.9..=99.9` range are kept as parsed, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ScaledTemperature(pub i64);

impl ScaledTemperature {
    pub const fn new(tenths: i64) -> Self {
        Self(tenths)
    }

    pub const fn tenths(self) -> i64 {
        self.0
    }

    /// Decode a token of an optional leading `-` followed by ASCII digits.
    ///
    /// The decimal point must already be stripped; the line scanner is
    /// responsible for rejecting any other byte before this is called.
    #[inline]
    pub fn parse(token: &[u8]) -> Self {
        let (negative, digits) = match token.split_first() {
            Some((&MINUS_SIGN, rest)) => (true, rest),
            _ => (false, token),
        };

        let mut value: i64 = 0;
        for &digit in digits {
            value = value * 10 + i64::from(digit - b'0');
        }

        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Truncating mean of scaled values, still in tenths.
    pub fn mean(sum: i64, count: u64) -> Self {
        Self(sum / count as i64)
    }

    pub fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}

impl fmt::Display for ScaledTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign is written separately so values in (-1.0, 0) keep their minus.
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let magnitude = self.0.unsigned_abs();
        write!(f, "{}.{}", magnitude / 10, magnitude % 10)
    }
}

impl FromStr for ScaledTemperature {
    type Err = ProcessingError;

    /// Parse decimal text such as `-12.3`, validating every byte.
    fn from_str(s: &str) -> Result<Self> {
        let mut token = [0u8; MAX_TOKEN_LEN];
        let mut len = 0;

        for (offset, &byte) in s.as_bytes().iter().enumerate() {
            match byte {
                DECIMAL_POINT => continue,
                MINUS_SIGN if len == 0 => {}
                b'0'..=b'9' => {}
                _ => return Err(ProcessingError::MalformedNumber { offset, byte }),
            }
            if len == MAX_TOKEN_LEN {
                return Err(ProcessingError::NumberTooLong { offset });
            }
            token[len] = byte;
            len += 1;
        }

        match &token[..len] {
            [] | [MINUS_SIGN] => Err(ProcessingError::EmptyNumber { offset: 0 }),
            digits => Ok(Self::parse(digits)),
        }
    }
}
