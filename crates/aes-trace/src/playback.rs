//! Cursor for stepping through an already computed trace.

/// Position within a slice of steps. Movement clamps at both ends.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'a, T> {
    steps: &'a [T],
    position: usize,
}

impl<'a, T> Playback<'a, T> {
    /// Starts at the first step.
    pub fn new(steps: &'a [T]) -> Self {
        Self { steps, position: 0 }
    }

    /// Step under the cursor, or `None` for an empty trace.
    pub fn current(&self) -> Option<&'a T> {
        self.steps.get(self.position)
    }

    /// Moves forward one step unless already on the last one.
    pub fn next(&mut self) -> Option<&'a T> {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.current()
    }

    /// Moves back one step unless already on the first one.
    pub fn prev(&mut self) -> Option<&'a T> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) -> Option<&'a T> {
        self.position = index.min(self.steps.len().saturating_sub(1));
        self.current()
    }

    /// Returns to the first step.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Zero-based index of the current step.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True on the last step (or for an empty trace).
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }
}
