//! Request line parsing.
//!
//! # Responsibilities
//! - Classify one inbound line as GET, PUT, or unrecognized
//! - Extract the raw target text following a GET method token
//!
//! # Design Decisions
//! - Parsing is total: malformed and empty lines classify as unrecognized
//!   instead of erroring, and the connection still closes normally
//! - No semantic validation of the target or HTTP version token here;
//!   the route table compares against the raw text itself

/// Request method, as far as this server distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    /// Accepted but unimplemented; produces no response.
    Put,
    /// Anything that is not a GET or PUT line.
    Unrecognized,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Unrecognized => "unrecognized",
        }
    }
}

/// One parsed request line.
///
/// Always built from a single complete transport message; carries no
/// continuation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Raw path-and-query text after the method token. Empty for non-GET.
    pub target: String,
}

impl Request {
    /// Parse one inbound line. Never fails.
    pub fn parse(line: &str) -> Self {
        if let Some(target) = line.strip_prefix("GET ") {
            Self {
                method: Method::Get,
                target: target.to_string(),
            }
        } else if line.starts_with("PUT") {
            // No PUT route exists, so the target is not extracted.
            Self {
                method: Method::Put,
                target: String::new(),
            }
        } else {
            Self {
                method: Method::Unrecognized,
                target: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_line_keeps_raw_target() {
        let request = Request::parse("GET / HTTP/1.1");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.target, "/ HTTP/1.1");
    }

    #[test]
    fn get_target_includes_query_text() {
        let request = Request::parse("GET /css/styles.css?v=1.0 HTTP/1.1");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.target, "/css/styles.css?v=1.0 HTTP/1.1");
    }

    #[test]
    fn put_is_classified_without_target() {
        let request = Request::parse("PUT /anything HTTP/1.1");
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.target, "");
    }

    #[test]
    fn garbage_and_empty_lines_are_unrecognized() {
        assert_eq!(Request::parse("").method, Method::Unrecognized);
        assert_eq!(Request::parse("Host: localhost").method, Method::Unrecognized);
        assert_eq!(Request::parse("get / HTTP/1.1").method, Method::Unrecognized);
        // A bare "GET" without the trailing space is not a well-formed GET line.
        assert_eq!(Request::parse("GET").method, Method::Unrecognized);
    }
}
