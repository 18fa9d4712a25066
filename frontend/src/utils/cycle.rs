/// Position inside a fixed-length list that wraps around at both ends.
///
/// Shared by the testimonial carousel and the gallery lightbox. An empty
/// list has no valid position, so every step on it is a no-op and
/// `current()` stays 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclicIndex {
    current: usize,
    len: usize,
}

impl CyclicIndex {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { current: (self.current + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { current: (self.current + self.len - 1) % self.len, ..self }
    }

    /// Moves to `index`, or returns `None` when it is out of range.
    pub fn jump(self, index: usize) -> Option<Self> {
        (index < self.len).then_some(Self { current: index, ..self })
    }
}
