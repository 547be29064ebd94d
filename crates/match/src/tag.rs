//! Dispatch on a runtime type tag

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::error::{MatchError, MatchResult};

/// Values that carry a discriminating tag
pub trait Tagged {
    /// The tag, if present
    fn tag(&self) -> Option<&str>;
}

/// JSON objects are tagged by their `"type"` string field
impl Tagged for Value {
    fn tag(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }
}

type Handler<'a, T, U> = Box<dyn Fn(T) -> U + 'a>;

/// Handlers keyed by tag.
///
/// ```rust
/// use paw_match::TagTable;
/// use serde_json::json;
///
/// let reducer = TagTable::new()
///     .on("increment", |action: serde_json::Value| action["payload"].as_i64().unwrap_or(0))
///     .on("reset", |_| 0);
///
/// assert_eq!(reducer.dispatch(json!({ "type": "increment", "payload": 5 })), Ok(5));
/// assert!(reducer.dispatch(json!({ "type": "explode" })).is_err());
/// ```
pub struct TagTable<'a, T, U> {
    handlers: HashMap<String, Handler<'a, T, U>>,
}

impl<T, U> Default for TagTable<'_, T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> fmt::Debug for TagTable<'_, T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("TagTable").field("tags", &tags).finish()
    }
}

impl<'a, T, U> TagTable<'a, T, U> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register the handler for `tag`, replacing any previous one
    pub fn on<H>(mut self, tag: impl Into<String>, handler: H) -> Self
    where
        H: Fn(T) -> U + 'a,
    {
        self.handlers.insert(tag.into(), Box::new(handler));
        self
    }

    /// Registered tags, in no particular order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Check if a handler exists for `tag`
    pub fn handles(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Run the handler registered for the value's tag
    pub fn dispatch(&self, value: T) -> MatchResult<U>
    where
        T: Tagged,
    {
        let handler = {
            let tag = value.tag().ok_or(MatchError::MissingTag)?;
            self.handlers
                .get(tag)
                .ok_or_else(|| MatchError::unknown_tag(tag))?
        };
        Ok(handler(value))
    }
}
