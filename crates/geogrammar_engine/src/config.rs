//! Matcher configuration.

use geogrammar_foundation::Case;

/// How the matcher picks among rules that match at the same start position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The longest match wins; ties go to the rule declared first.
    #[default]
    Longest,
    /// The first rule in declaration order that matches wins.
    FirstDeclared,
}

/// Configuration for a [`Matcher`](crate::Matcher).
#[derive(Clone, Debug)]
pub struct MatcherConfig {
    /// Rule selection at one start position.
    pub strategy: MatchStrategy,
    /// Case that inflected attributes are normalized to.
    pub target_case: Case,
    /// Whether inflected text keeps the source token's leading capital.
    pub preserve_capitalization: bool,
    /// Upper bound on the repetitions of one repeatable element. Unbounded by
    /// default, so a repeat consumes its maximal run.
    pub max_repeat: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::Longest,
            target_case: Case::Nominative,
            preserve_capitalization: true,
            max_repeat: usize::MAX,
        }
    }
}

impl MatcherConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the rule selection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method to set the normalization target case.
    #[must_use]
    pub fn with_target_case(mut self, case: Case) -> Self {
        self.target_case = case;
        self
    }

    /// Builder method to toggle capitalization preservation.
    #[must_use]
    pub fn with_preserve_capitalization(mut self, preserve: bool) -> Self {
        self.preserve_capitalization = preserve;
        self
    }

    /// Builder method to bound repetitions. Zero is treated as one.
    #[must_use]
    pub fn with_max_repeat(mut self, max_repeat: usize) -> Self {
        self.max_repeat = max_repeat.max(1);
        self
    }
}
