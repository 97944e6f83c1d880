//! Request context and responses.

use pitchside_alerts::AlertPage;
use std::collections::HashMap;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("req_{:x}-{:x}", ts as u64, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Extracted route parameters (e.g., `:slug` from `/shop/product/:slug`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// Form body fields.
pub type FormParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// Typed request context passed to route handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path.
    pub path: String,
    /// Extracted route parameters.
    pub params: RouteParams,
    /// Query string parameters.
    pub query: QueryParams,
    /// Form body fields.
    pub form: FormParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Session identifier from the `sid` cookie, if present.
    pub session_id: Option<String>,
}

impl RequestContext {
    /// Create a new request context.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::generate(),
            method,
            path: path.into(),
            params: HashMap::new(),
            query: HashMap::new(),
            form: HashMap::new(),
            headers: HashMap::new(),
            session_id: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Shorthand for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Add a query parameter.
    pub fn with_query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.insert(name.to_string(), value.into());
        self
    }

    /// Add a form field.
    pub fn with_form(mut self, name: &str, value: impl Into<String>) -> Self {
        self.form.insert(name.to_string(), value.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    /// Attach a session identifier.
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Get a query parameter by name, trimmed; absent means "".
    pub fn query_param(&self, name: &str) -> &str {
        self.query.get(name).map(|s| s.trim()).unwrap_or("")
    }

    /// Get a form field by name, trimmed; absent means "".
    pub fn form_field(&self, name: &str) -> &str {
        self.form.get(name).map(|s| s.trim()).unwrap_or("")
    }

    /// Get a form field verbatim; passwords must not be trimmed.
    pub fn form_value(&self, name: &str) -> &str {
        self.form.get(name).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// A rendered response.
#[derive(Debug)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Response body.
    pub body: String,
    /// The served page's alert elements. Empty for redirects and errors.
    pub alerts: AlertPage,
}

impl Response {
    /// A 200 HTML response.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: body.into(),
            alerts: AlertPage::new(),
        }
    }

    /// A 302 redirect.
    pub fn redirect(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            status: 302,
            headers: vec![("location".to_string(), location)],
            body: String::new(),
            alerts: AlertPage::new(),
        }
    }

    /// A 404 response.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: "<h1>404 Not Found</h1>".to_string(),
            alerts: AlertPage::new(),
        }
    }

    /// A 403 response.
    pub fn forbidden() -> Self {
        Self {
            status: 403,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: "<h1>403 Forbidden</h1>".to_string(),
            alerts: AlertPage::new(),
        }
    }

    /// A 500 response.
    pub fn internal_error() -> Self {
        Self {
            status: 500,
            headers: vec![(
                "content-type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: "<h1>500 Internal Server Error</h1>".to_string(),
            alerts: AlertPage::new(),
        }
    }

    /// Attach the served page's alerts.
    pub fn with_alerts(mut self, alerts: AlertPage) -> Self {
        self.alerts = alerts;
        self
    }

    /// Append a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Set the session cookie.
    pub fn with_session_cookie(self, session_id: &str) -> Self {
        self.with_header(
            "set-cookie",
            format!("sid={}; Path=/; HttpOnly", session_id),
        )
    }

    /// Check for a redirect status.
    pub fn is_redirect(&self) -> bool {
        self.status == 302
    }

    /// The `location` header of a redirect, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == "location")
            .map(|(_, v)| v.as_str())
    }
}
