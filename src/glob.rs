//! Shell-style pattern matching against a single path segment.
//! Used by the tree lister for its exclude and include filters.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles one shell pattern. `*` never crosses a path separator.
///
/// A pattern the glob engine rejects (for instance an unclosed `[`) is
/// compiled as a literal, so it only matches a name spelled exactly like it.
fn compile(pattern: &str) -> Option<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .or_else(|e| {
            debug!("Treating pattern '{pattern}' literally: {e}");
            Glob::new(&globset::escape(pattern))
        })
        .ok()
}

/// Returns true when `name` matches the shell pattern `pattern`.
///
/// # Example
/// ```
/// use packstrap::glob::matches;
///
/// assert!(matches("setup.py", "*.py"));
/// assert!(!matches("setup.cfg", "*.py"));
/// ```
pub fn matches(name: &str, pattern: &str) -> bool {
    compile(pattern)
        .map(|glob| glob.compile_matcher())
        .is_some_and(|matcher: GlobMatcher| matcher.is_match(name))
}

/// An ordered list of shell patterns compiled into a single matcher.
#[derive(Debug, Clone)]
pub struct PatternList {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternList {
    /// Compiles the given patterns. Malformed patterns degrade to literals.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for glob in patterns.iter().filter_map(|p| compile(p)) {
            builder.add(glob);
        }
        let set = builder.build().unwrap_or_else(|e| {
            debug!("Pattern list failed to compile, matching nothing: {e}");
            GlobSet::empty()
        });

        Self { patterns, set }
    }

    /// A list that matches nothing.
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true when `name` matches at least one pattern.
    pub fn matches_any(&self, name: &str) -> bool {
        !self.is_empty() && self.set.is_match(name)
    }
}

impl Default for PatternList {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_does_not_cross_separator() {
        assert!(matches("module.pyc", "*.pyc"));
        assert!(!matches("pkg/module.pyc", "*.pyc"));
    }

    #[test]
    fn test_question_mark_and_classes() {
        assert!(matches("a1.txt", "a?.txt"));
        assert!(!matches("a12.txt", "a?.txt"));
        assert!(matches("b.txt", "[abc].txt"));
        assert!(!matches("d.txt", "[abc].txt"));
        assert!(matches("d.txt", "[!abc].txt"));
    }

    #[test]
    fn test_malformed_pattern_is_literal() {
        assert!(!matches("a.txt", "[a.txt"));
        assert!(matches("[a.txt", "[a.txt"));
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let list = PatternList::empty();
        assert!(list.is_empty());
        assert!(!list.matches_any("anything"));
    }
}
