//! HTTP status classes

use std::fmt;

/// Broad class of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 200–299
    Success,
    /// 400–499
    ClientError,
    /// 500 and above
    ServerError,
    /// Everything else (1xx, 3xx)
    Other,
}

impl StatusClass {
    /// Classify a numeric status code
    #[must_use]
    pub fn of(code: u16) -> Self {
        match code {
            200..=299 => Self::Success,
            400..=499 => Self::ClientError,
            500.. => Self::ServerError,
            _ => Self::Other,
        }
    }
}

impl From<http::StatusCode> for StatusClass {
    fn from(status: http::StatusCode) -> Self {
        Self::of(status.as_u16())
    }
}

type Handler<'a, U> = Box<dyn Fn(u16) -> U + 'a>;

/// Optional handlers per status class, with a shared fallback
pub struct StatusHandlers<'a, U> {
    success: Option<Handler<'a, U>>,
    client_error: Option<Handler<'a, U>>,
    server_error: Option<Handler<'a, U>>,
    fallback: Option<Handler<'a, U>>,
}

impl<U> Default for StatusHandlers<'_, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> fmt::Debug for StatusHandlers<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusHandlers")
            .field("success", &self.success.is_some())
            .field("client_error", &self.client_error.is_some())
            .field("server_error", &self.server_error.is_some())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<'a, U> StatusHandlers<'a, U> {
    /// Create a set with no handlers
    pub fn new() -> Self {
        Self {
            success: None,
            client_error: None,
            server_error: None,
            fallback: None,
        }
    }

    /// Handler for 2xx
    pub fn success(mut self, handler: impl Fn(u16) -> U + 'a) -> Self {
        self.success = Some(Box::new(handler));
        self
    }

    /// Handler for 4xx
    pub fn client_error(mut self, handler: impl Fn(u16) -> U + 'a) -> Self {
        self.client_error = Some(Box::new(handler));
        self
    }

    /// Handler for 5xx and above
    pub fn server_error(mut self, handler: impl Fn(u16) -> U + 'a) -> Self {
        self.server_error = Some(Box::new(handler));
        self
    }

    /// Handler for any code whose class has no handler
    pub fn fallback(mut self, handler: impl Fn(u16) -> U + 'a) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Run the class handler, else the fallback; `None` when neither exists
    pub fn dispatch(&self, status: impl Into<u16>) -> Option<U> {
        let code = status.into();
        let handler = match StatusClass::of(code) {
            StatusClass::Success => self.success.as_ref(),
            StatusClass::ClientError => self.client_error.as_ref(),
            StatusClass::ServerError => self.server_error.as_ref(),
            StatusClass::Other => None,
        };

        handler.or(self.fallback.as_ref()).map(|handler| handler(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, StatusClass::Success)]
    #[case(299, StatusClass::Success)]
    #[case(304, StatusClass::Other)]
    #[case(404, StatusClass::ClientError)]
    #[case(503, StatusClass::ServerError)]
    #[case(600, StatusClass::ServerError)]
    #[case(101, StatusClass::Other)]
    fn test_classification(#[case] code: u16, #[case] expected: StatusClass) {
        assert_eq!(StatusClass::of(code), expected);
    }

    #[test]
    fn test_from_status_code() {
        assert_eq!(StatusClass::from(http::StatusCode::NOT_FOUND), StatusClass::ClientError);
    }

    #[test]
    fn test_dispatch_prefers_class_handler() {
        let handlers = StatusHandlers::new()
            .success(|code| format!("ok {code}"))
            .fallback(|code| format!("other {code}"));

        assert_eq!(handlers.dispatch(201_u16), Some("ok 201".to_string()));
        assert_eq!(
            handlers.dispatch(http::StatusCode::BAD_GATEWAY),
            Some("other 502".to_string())
        );
    }

    #[test]
    fn test_dispatch_without_handlers() {
        let handlers = StatusHandlers::<()>::new().client_error(|_| ());
        assert_eq!(handlers.dispatch(302_u16), None);
        assert_eq!(handlers.dispatch(418_u16), Some(()));
    }
}
