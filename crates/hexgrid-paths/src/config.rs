//! Search configuration.

/// Knobs shared by range and path search.
///
/// The default is unbounded: a search runs until its frontier is empty or
/// the goal is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Stop after this many nodes have been taken off the frontier.
    ///
    /// A capped range search returns what it had reached so far; a capped
    /// path search returns no path.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// No expansion cap.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Set the expansion cap (builder).
    #[inline]
    pub const fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Whether `expanded` nodes exhaust the cap.
    #[inline]
    pub(crate) fn exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}
