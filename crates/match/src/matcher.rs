//! Ordered guard arms with an optional fallback

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{MatchError, MatchResult};

type Guard<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;
type Handler<'a, T, U> = Box<dyn Fn(T) -> U + 'a>;

/// Dispatch a value to the first arm whose guard accepts it.
///
/// ```rust
/// use paw_match::Matcher;
///
/// let grade = Matcher::new()
///     .range(90..=100, |_| "A")
///     .range(80..=89, |_| "B")
///     .otherwise(|_| "F");
///
/// assert_eq!(grade.apply(95), Ok("A"));
/// assert_eq!(grade.apply(12), Ok("F"));
/// ```
pub struct Matcher<'a, T, U> {
    arms: Vec<(Guard<'a, T>, Handler<'a, T, U>)>,
    fallback: Option<Handler<'a, T, U>>,
}

impl<T, U> Default for Matcher<'_, T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for Matcher<'_, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("arms", &self.arms.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<'a, T, U> Matcher<'a, T, U> {
    /// Create a matcher with no arms
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            fallback: None,
        }
    }

    /// Add an arm guarded by a predicate
    pub fn when<G, H>(mut self, guard: G, handler: H) -> Self
    where
        G: Fn(&T) -> bool + 'a,
        H: Fn(T) -> U + 'a,
    {
        self.arms.push((Box::new(guard), Box::new(handler)));
        self
    }

    /// Add an arm taken when the value equals `expected`
    pub fn literal<H>(self, expected: T, handler: H) -> Self
    where
        T: PartialEq + 'a,
        H: Fn(T) -> U + 'a,
    {
        self.when(move |value| *value == expected, handler)
    }

    /// Add an arm taken when the value lies in `range` (both ends inclusive)
    pub fn range<H>(self, range: RangeInclusive<T>, handler: H) -> Self
    where
        T: PartialOrd + 'a,
        H: Fn(T) -> U + 'a,
    {
        self.when(move |value| range.contains(value), handler)
    }

    /// Handler used when no arm matches
    pub fn otherwise<H>(mut self, fallback: H) -> Self
    where
        H: Fn(T) -> U + 'a,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Number of arms, excluding the fallback
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    /// Check if no arm has been added
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Run the first matching arm, then the fallback
    pub fn apply(&self, value: T) -> MatchResult<U>
    where
        T: fmt::Debug,
    {
        if let Some((_, handler)) = self.arms.iter().find(|(guard, _)| guard(&value)) {
            return Ok(handler(value));
        }

        match &self.fallback {
            Some(fallback) => Ok(fallback(value)),
            None => {
                tracing::trace!(arms = self.arms.len(), "no arm matched");
                Err(MatchError::no_match(&value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shape {
        Circle { radius: f64 },
        Rectangle { width: f64, height: f64 },
    }

    #[test]
    fn test_first_matching_arm_wins() {
        let matcher = Matcher::new()
            .when(|n: &i32| *n > 0, |_| "positive")
            .when(|n: &i32| *n > 10, |_| "large");
        assert_eq!(matcher.apply(50), Ok("positive"));
    }

    #[test]
    fn test_guards_over_enum_values() {
        let area = Matcher::new()
            .when(
                |s: &Shape| matches!(s, Shape::Circle { .. }),
                |s| match s {
                    Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
                    Shape::Rectangle { .. } => unreachable!(),
                },
            )
            .otherwise(|s| match s {
                Shape::Rectangle { width, height } => width * height,
                Shape::Circle { .. } => 0.0,
            });

        assert_eq!(area.apply(Shape::Rectangle { width: 10.0, height: 20.0 }), Ok(200.0));
        let circle = area.apply(Shape::Circle { radius: 1.0 }).unwrap();
        assert!((circle - std::f64::consts::PI).abs() < f64::EPSILON);
    }

    #[test]
    fn test_literal_arms() {
        let colors = Matcher::new()
            .literal("red", |_| "#ff0000")
            .literal("green", |_| "#00ff00");

        assert_eq!(colors.apply("green"), Ok("#00ff00"));
        assert_eq!(
            colors.apply("blue"),
            Err(MatchError::NoMatch {
                value: "\"blue\"".to_string()
            })
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let matcher = Matcher::new().range(0..=10, |n| n * 2);
        assert_eq!(matcher.apply(0), Ok(0));
        assert_eq!(matcher.apply(10), Ok(20));
        assert!(matcher.apply(11).is_err());
    }

    #[test]
    fn test_len_and_debug() {
        let matcher: Matcher<'_, u8, u8> = Matcher::new().when(|_| true, |v| v).otherwise(|v| v);
        assert_eq!(matcher.len(), 1);
        assert!(!matcher.is_empty());
        assert_eq!(format!("{matcher:?}"), "Matcher { arms: 1, fallback: true }");
    }
}
