//! Step-by-step navigation through the guide.

use super::model::GuideStep;

/// Tracks the current page of a guide.
///
/// The index always points at a valid step when the guide is non-empty;
/// moving past either end stays put.
#[derive(Debug, Clone)]
pub struct GuideNavigator {
    steps: Vec<GuideStep>,
    current: usize,
}

impl GuideNavigator {
    /// Start at the first step.
    #[must_use]
    pub const fn new(steps: Vec<GuideStep>) -> Self {
        Self { steps, current: 0 }
    }

    /// The step being shown, if the guide has any.
    #[must_use]
    pub fn current(&self) -> Option<&GuideStep> {
        self.steps.get(self.current)
    }

    /// Zero-based index of the current step.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.current
    }

    /// Advance one step. Returns `false` on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Go back one step. Returns `false` on the first step.
    pub const fn previous(&mut self) -> bool {
        if self.is_first() {
            false
        } else {
            self.current -= 1;
            true
        }
    }

    /// Jump to a step, clamping to the last one.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.steps.len().saturating_sub(1));
    }

    /// Check whether the first step is shown.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Check whether the last step is shown.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    /// One-based position and total step count.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        if self.steps.is_empty() {
            (0, 0)
        } else {
            (self.current + 1, self.steps.len())
        }
    }

    /// All steps.
    #[must_use]
    pub fn steps(&self) -> &[GuideStep] {
        &self.steps
    }
}
