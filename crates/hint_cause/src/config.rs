//! Cause rendering configuration.

/// Knobs controlling how causes are rendered.
///
/// The defaults match what the call-violation messages are tuned for; most
/// callers use [`CauseConfig::DEFAULT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CauseConfig {
    /// Longest pith representation embedded in a cause, in characters.
    /// Longer representations are cut and end with `...`.
    pub max_repr_len: usize,
    /// Indentation added per nesting level of a bulleted union cause.
    pub bullet_indent: &'static str,
}

impl CauseConfig {
    pub const DEFAULT: CauseConfig = CauseConfig {
        max_repr_len: 96,
        bullet_indent: "  ",
    };

    #[must_use]
    pub const fn with_max_repr_len(mut self, max_repr_len: usize) -> Self {
        self.max_repr_len = max_repr_len;
        self
    }

    #[must_use]
    pub const fn with_bullet_indent(mut self, bullet_indent: &'static str) -> Self {
        self.bullet_indent = bullet_indent;
        self
    }
}

impl Default for CauseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
