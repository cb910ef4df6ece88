use crate::error::{ProcessingError, Result};
use crate::models::{ByteSpan, ScaledTemperature};
use crate::utils::constants::{
    DECIMAL_POINT, FIELD_SEPARATOR, LINE_TERMINATOR, MAX_TOKEN_LEN, MINUS_SIGN,
};

/// Sign and digits of a temperature field, decimal point removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken {
    bytes: [u8; MAX_TOKEN_LEN],
    len: usize,
}

impl NumberToken {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn temperature(&self) -> ScaledTemperature {
        ScaledTemperature::parse(self.as_bytes())
    }
}

/// One `name;temperature` record located in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine {
    pub name: ByteSpan,
    pub token: NumberToken,
    /// Bytes from the record start up to, not including, its terminator.
    pub consumed: usize,
}

pub struct LineScanner<'a> {
    buffer: &'a [u8],
}

impl<'a> LineScanner<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Scan the record starting at `offset`.
    ///
    /// End of buffer terminates the final record when it lacks a newline.
    #[inline]
    pub fn scan(&self, offset: usize) -> Result<ScannedLine> {
        let buffer = self.buffer;

        let mut pos = offset;
        while pos < buffer.len() && buffer[pos] != FIELD_SEPARATOR {
            if buffer[pos] == LINE_TERMINATOR {
                return Err(ProcessingError::MissingSeparator { offset });
            }
            pos += 1;
        }
        if pos == buffer.len() {
            return Err(ProcessingError::MissingSeparator { offset });
        }

        let name = ByteSpan::new(offset, pos - offset);
        let number_start = pos + 1;

        let mut token = NumberToken {
            bytes: [0; MAX_TOKEN_LEN],
            len: 0,
        };

        pos = number_start;
        while pos < buffer.len() {
            let byte = buffer[pos];
            match byte {
                LINE_TERMINATOR => break,
                DECIMAL_POINT => {
                    pos += 1;
                    continue;
                }
                MINUS_SIGN if token.len == 0 => {}
                b'0'..=b'9' => {}
                _ => return Err(ProcessingError::MalformedNumber { offset: pos, byte }),
            }
            if token.len == MAX_TOKEN_LEN {
                return Err(ProcessingError::NumberTooLong { offset: number_start });
            }
            token.bytes[token.len] = byte;
            token.len += 1;
            pos += 1;
        }

        if matches!(token.as_bytes(), [] | [MINUS_SIGN]) {
            return Err(ProcessingError::EmptyNumber {
                offset: number_start,
            });
        }

        Ok(ScannedLine {
            name,
            token,
            consumed: pos - offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_positive_record() -> Result<()> {
        let buffer = b"Hamburg;12.3\nBerlin;-2.5\n";
        let scanner = LineScanner::new(buffer);

        let line = scanner.scan(0)?;

        assert_eq!(line.name, ByteSpan::new(0, 7));
        assert_eq!(line.name.resolve(buffer), b"Hamburg");
        assert_eq!(line.token.as_bytes(), b"123");
        assert_eq!(line.token.temperature(), ScaledTemperature::new(123));
        assert_eq!(line.consumed, 12);
        assert_eq!(buffer[line.consumed], b'\n');

        Ok(())
    }

    #[test]
    fn test_scan_negative_record_mid_buffer() -> Result<()> {
        let buffer = b"Hamburg;12.3\nBerlin;-2.5\n";
        let scanner = LineScanner::new(buffer);

        let line = scanner.scan(13)?;

        assert_eq!(line.name.resolve(buffer), b"Berlin");
        assert_eq!(line.token.as_bytes(), b"-25");
        assert_eq!(line.token.temperature(), ScaledTemperature::new(-25));
        assert_eq!(13 + line.consumed, 24);

        Ok(())
    }

    #[test]
    fn test_scan_last_record_without_newline() -> Result<()> {
        let buffer = b"X;-0.7";
        let line = LineScanner::new(buffer).scan(0)?;

        assert_eq!(line.token.temperature(), ScaledTemperature::new(-7));
        assert_eq!(line.consumed, buffer.len());

        Ok(())
    }

    #[test]
    fn test_scan_keeps_unusual_name_bytes() -> Result<()> {
        let buffer = "São Paulo;25.1\n".as_bytes();
        let line = LineScanner::new(buffer).scan(0)?;

        assert_eq!(line.name.resolve(buffer), "São Paulo".as_bytes());

        Ok(())
    }

    #[test]
    fn test_scan_rejects_malformed_records() {
        fn scanner_err(input: &[u8]) -> ProcessingError {
            LineScanner::new(input).scan(0).unwrap_err()
        }

        assert!(matches!(
            scanner_err(b"Oslo;1a.0\n"),
            ProcessingError::MalformedNumber { offset: 6, byte: b'a' }
        ));
        assert!(matches!(
            scanner_err(b"Oslo;1.0-\n"),
            ProcessingError::MalformedNumber { offset: 8, .. }
        ));
        assert!(matches!(
            scanner_err(b"Oslo 1.0\n"),
            ProcessingError::MissingSeparator { offset: 0 }
        ));
        assert!(matches!(
            scanner_err(b"Oslo"),
            ProcessingError::MissingSeparator { offset: 0 }
        ));
        assert!(matches!(
            scanner_err(b"Oslo;\n"),
            ProcessingError::EmptyNumber { offset: 5 }
        ));
        assert!(matches!(
            scanner_err(b"Oslo;123456789.0\n"),
            ProcessingError::NumberTooLong { offset: 5 }
        ));
    }
}
