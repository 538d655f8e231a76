use std::num::NonZeroUsize;

/// Offsets `0, chunk, 2 * chunk, ...` strictly below `total`.
///
/// Cloning restarts the sequence from wherever the clone was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offsets {
    next: usize,
    total: usize,
    chunk: usize,
}

impl Offsets {
    pub fn new(total: usize, chunk: NonZeroUsize) -> Self {
        Self {
            next: 0,
            total,
            chunk: chunk.get(),
        }
    }

    pub fn chunk(&self) -> usize {
        self.chunk
    }
}

impl Iterator for Offsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.total {
            return None;
        }
        let offset = self.next;
        // saturating: a huge chunk must not wrap back below `total`
        self.next = self.next.saturating_add(self.chunk);
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.next).div_ceil(self.chunk);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Offsets {}
