//! HTTP status code carried by server-side failures.

/// HTTP status code for error reporting.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Fallback message used when a failed response carries no usable body.
    ///
    /// Always contains the numeric code, e.g. `HTTP 503 Service Unavailable`
    /// or `HTTP 599` for codes without a registered reason phrase.
    pub fn describe(&self, reason: Option<&str>) -> String {
        match reason {
            Some(reason) if !reason.is_empty() => format!("HTTP {} {}", self.0, reason),
            _ => format!("HTTP {}", self.0),
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
