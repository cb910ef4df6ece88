use std::cmp::Ordering;

/// A view of `len` bytes starting at `offset` in the shared input buffer.
///
/// Spans are plain coordinates. The derived `PartialEq`/`Eq` compare
/// `(offset, len)`, so two spans naming the same station at different
/// offsets are unequal. Name equality and ordering go through
/// [`ByteSpan::bytes_eq`] and [`ByteSpan::cmp_bytes`] with the buffer the
/// spans point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteSpan {
    pub offset: usize,
    pub len: usize,
}

impl ByteSpan {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    #[inline]
    pub fn resolve<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.offset..self.end()]
    }

    #[inline]
    pub fn bytes_eq(&self, buffer: &[u8], other: &ByteSpan, other_buffer: &[u8]) -> bool {
        self.len == other.len && self.resolve(buffer) == other.resolve(other_buffer)
    }

    /// Lexicographic byte order; a strict prefix sorts before the longer name.
    pub fn cmp_bytes(&self, buffer: &[u8], other: &ByteSpan, other_buffer: &[u8]) -> Ordering {
        self.resolve(buffer).cmp(other.resolve(other_buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_referenced_bytes() {
        let buffer = b"Oslo;1.0\nOslo;2.0\n";
        let first = ByteSpan::new(0, 4);
        let second = ByteSpan::new(9, 4);

        assert_ne!(first, second);
        assert!(first.bytes_eq(buffer, &second, buffer));
        assert!(!first.bytes_eq(buffer, &ByteSpan::new(0, 3), buffer));
    }

    #[test]
    fn test_prefix_sorts_first() {
        let buffer = b"AB;1.0\nA;1.0\n";
        let ab = ByteSpan::new(0, 2);
        let a = ByteSpan::new(7, 1);

        assert_eq!(a.cmp_bytes(buffer, &ab, buffer), Ordering::Less);
        assert_eq!(ab.cmp_bytes(buffer, &a, buffer), Ordering::Greater);
    }
}
