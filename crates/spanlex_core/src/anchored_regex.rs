//! Regular expressions anchored to the start of the haystack.
//!
//! Execution is delegated to the `regex` crate, which matches in time linear
//! in the haystack. The remaining cost axis, the size of the compiled
//! program, is capped by [`RegexLimits`] at construction time: a pattern that
//! would exceed the limits fails to compile instead of running slowly.

use regex::{Regex, RegexBuilder};

/// Compile-time budget for regex patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegexLimits {
    /// Approximate upper bound, in bytes, on the compiled program.
    pub size_limit: usize,
    /// Upper bound, in bytes, on the lazy DFA cache per pattern.
    pub dfa_size_limit: usize,
    /// Maximum nesting depth of the pattern's syntax tree.
    pub nest_limit: u32,
}

impl Default for RegexLimits {
    fn default() -> Self {
        RegexLimits {
            size_limit: 1 << 20,
            dfa_size_limit: 2 << 20,
            nest_limit: 128,
        }
    }
}

/// A compiled pattern that only matches at position 0 of its haystack.
#[derive(Clone, Debug)]
pub struct AnchoredRegex {
    pattern: String,
    regex: Regex,
}

impl AnchoredRegex {
    /// Compile `pattern` anchored at the start of the haystack.
    ///
    /// The pattern is wrapped as `^(?:pattern)`. The group keeps top-level
    /// alternations anchored; a pattern that already starts with `^` is
    /// unaffected by the extra anchor.
    pub fn new(pattern: &str, limits: &RegexLimits) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!("^(?:{pattern})"))
            .size_limit(limits.size_limit)
            .dfa_size_limit(limits.dfa_size_limit)
            .nest_limit(limits.nest_limit)
            .build()?;
        Ok(AnchoredRegex {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as written by the caller, without the added anchor.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Length in bytes of the match at the start of `haystack`.
    ///
    /// Empty matches are reported as `None`.
    pub fn prefix_len(&self, haystack: &str) -> Option<usize> {
        self.regex
            .find(haystack)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}
