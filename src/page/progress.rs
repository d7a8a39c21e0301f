//! Quiz completion tracking.

use std::collections::HashSet;

/// Tracks which named single-choice question groups have been answered.
///
/// Re-answering a group (picking a different choice in the same radio
/// group) does not change the count; membership is per group name.
#[derive(Debug, Clone, Default)]
pub struct QuizProgress {
    total_groups: usize,
    answered: HashSet<String>,
}

impl QuizProgress {
    /// Create a tracker over a fixed number of question groups.
    pub fn new(total_groups: usize) -> Self {
        Self {
            total_groups,
            answered: HashSet::new(),
        }
    }

    /// Record an answer in the named group. Returns `true` if the group was
    /// not answered before.
    pub fn answer(&mut self, group: impl Into<String>) -> bool {
        self.answered.insert(group.into())
    }

    /// Number of distinct groups answered so far.
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    /// Total number of question groups.
    pub fn total_groups(&self) -> usize {
        self.total_groups
    }

    /// Completion percentage in `[0, 100]`. Zero total groups yields 0.
    pub fn percent(&self) -> f64 {
        if self.total_groups == 0 {
            return 0.0;
        }
        self.answered.len() as f64 / self.total_groups as f64 * 100.0
    }

    /// Tier classification of the current percentage.
    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percent(self.percent())
    }

    /// Check if every group has been answered.
    pub fn is_complete(&self) -> bool {
        self.total_groups > 0 && self.answered.len() >= self.total_groups
    }
}

/// Three-tier color classification of quiz progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    /// Below 50%
    Low,
    /// 50% to just under 80%
    Medium,
    /// 80% and above
    High,
}

impl ProgressTier {
    /// Classify a percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 50.0 {
            ProgressTier::Low
        } else if percent < 80.0 {
            ProgressTier::Medium
        } else {
            ProgressTier::High
        }
    }

    /// The progress-bar CSS class for this tier.
    pub fn css_class(self) -> &'static str {
        match self {
            ProgressTier::Low => "bg-danger",
            ProgressTier::Medium => "bg-warning",
            ProgressTier::High => "bg-success",
        }
    }
}
