#![forbid(unsafe_code)]

//! Cyclic index for carousels that wrap around (testimonials).

/// Index into `len` items that wraps in both directions.
///
/// An empty rotator stays at index 0 and ignores navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotator {
    index: usize,
    len: usize,
}

impl Rotator {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one step, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Step back one, wrapping from the first item to the last.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `index`, reduced modulo the length.
    pub fn select(&mut self, index: usize) -> usize {
        if self.len > 0 {
            self.index = index % self.len;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut r = Rotator::new(3);
        assert_eq!(r.next(), 1);
        assert_eq!(r.next(), 2);
        assert_eq!(r.next(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut r = Rotator::new(3);
        assert_eq!(r.previous(), 2);
        assert_eq!(r.previous(), 1);
    }

    #[test]
    fn empty_is_inert() {
        let mut r = Rotator::new(0);
        assert!(r.is_empty());
        assert_eq!(r.next(), 0);
        assert_eq!(r.previous(), 0);
        assert_eq!(r.select(7), 0);
    }

    #[test]
    fn select_reduces_modulo_len() {
        let mut r = Rotator::new(3);
        assert_eq!(r.select(4), 1);
    }
}
