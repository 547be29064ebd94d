//! String dispatch on exact values and regular expressions

use std::fmt;

use regex::Regex;

use crate::error::{MatchError, MatchResult};

type Handler<'a, U> = Box<dyn Fn(&str) -> U + 'a>;

enum Pattern {
    Exact(String),
    Regex(Regex),
}

impl Pattern {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Pattern::Exact(expected) => expected == value,
            Pattern::Regex(regex) => regex.is_match(value),
        }
    }
}

/// Dispatch a string to the first arm whose pattern accepts it.
///
/// Regex arms search anywhere in the input; anchor with `^…$` to require a
/// full match.
pub struct StringMatcher<'a, U> {
    arms: Vec<(Pattern, Handler<'a, U>)>,
    fallback: Option<Handler<'a, U>>,
}

impl<U> Default for StringMatcher<'_, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> fmt::Debug for StringMatcher<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self
            .arms
            .iter()
            .map(|(pattern, _)| match pattern {
                Pattern::Exact(expected) => expected.as_str(),
                Pattern::Regex(regex) => regex.as_str(),
            })
            .collect();

        f.debug_struct("StringMatcher")
            .field("patterns", &patterns)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<'a, U> StringMatcher<'a, U> {
    /// Create a matcher with no arms
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            fallback: None,
        }
    }

    /// Add an arm taken when the input equals `expected`
    pub fn exact<H>(mut self, expected: impl Into<String>, handler: H) -> Self
    where
        H: Fn(&str) -> U + 'a,
    {
        self.arms
            .push((Pattern::Exact(expected.into()), Box::new(handler)));
        self
    }

    /// Compile `pattern` and add an arm taken when it matches the input
    pub fn regex<H>(self, pattern: &str, handler: H) -> MatchResult<Self>
    where
        H: Fn(&str) -> U + 'a,
    {
        let regex =
            Regex::new(pattern).map_err(|e| MatchError::invalid_pattern(pattern, e.to_string()))?;
        Ok(self.compiled(regex, handler))
    }

    /// Add an arm for an already compiled regex
    pub fn compiled<H>(mut self, regex: Regex, handler: H) -> Self
    where
        H: Fn(&str) -> U + 'a,
    {
        self.arms.push((Pattern::Regex(regex), Box::new(handler)));
        self
    }

    /// Handler used when no arm matches
    pub fn otherwise<H>(mut self, fallback: H) -> Self
    where
        H: Fn(&str) -> U + 'a,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Run the first matching arm, then the fallback
    pub fn apply(&self, value: &str) -> MatchResult<U> {
        if let Some((_, handler)) = self.arms.iter().find(|(pattern, _)| pattern.accepts(value)) {
            return Ok(handler(value));
        }

        self.fallback
            .as_ref()
            .map(|fallback| fallback(value))
            .ok_or_else(|| MatchError::no_match(&value))
    }
}
