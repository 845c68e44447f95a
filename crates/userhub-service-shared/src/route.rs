//! The declarative route table.
//!
//! A [`RouteTable`] is a data-only description of the API surface: groups of
//! named endpoints, each carrying an HTTP method, an optional input
//! [`Schema`], an ordered list of path parameters, and a type-erased async
//! handler. Tables are built once at startup and never mutated; groups and
//! endpoints are kept in vectors so iteration order is declaration order,
//! which makes path registration reproducible across runs.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::{response::Response, BoxError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::schema::Schema;

/// HTTP methods an endpoint may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a handler sees: the raw request body and the decoded path
/// parameters, in path order.
///
/// Validation never rewrites this; handlers always receive the request as it
/// arrived.
#[derive(Debug, Clone)]
pub struct RequestContext {
    body: Value,
    params: Vec<(String, String)>,
}

impl RequestContext {
    pub fn new(body: Value, params: Vec<(String, String)>) -> Self {
        Self { body, params }
    }

    /// The raw JSON body. An absent body reads as an empty object.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Deserialize the body into a typed value.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }

    /// Path parameters in path order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a single path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The object the guard validates: body keys overlaid with path
    /// parameters (parameters win on collision).
    pub fn merged(&self) -> Value {
        let mut merged: Map<String, Value> = match &self.body {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        for (name, value) in &self.params {
            merged.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(merged)
    }
}

/// Boxed future returned by endpoint handlers.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Response, BoxError>> + Send>>;

/// A type-erased async endpoint handler.
///
/// Failures are reported by returning an error (an
/// [`ApiException`](crate::ApiException) or anything else boxable); handlers
/// never build error responses themselves.
pub type Handler = Arc<dyn Fn(RequestContext) -> HandlerFuture + Send + Sync>;

/// Erase an async function into a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, BoxError>> + Send + 'static,
{
    Arc::new(move |ctx| Box::pin(f(ctx)))
}

/// One endpoint: method, optional input schema, ordered path parameters, and
/// the handler.
#[derive(Clone)]
pub struct Endpoint {
    method: Method,
    validator: Option<Arc<Schema>>,
    handler: Handler,
    with_params: Vec<String>,
}

impl Endpoint {
    pub fn new(method: Method, handler: Handler) -> Self {
        Self {
            method,
            validator: None,
            handler,
            with_params: Vec::new(),
        }
    }

    /// Declare an input schema; the applier inserts a guard for it.
    pub fn with_validator(mut self, schema: Schema) -> Self {
        self.validator = Some(Arc::new(schema));
        self
    }

    /// Declare trailing path parameters, appended to the path in order.
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn validator(&self) -> Option<&Arc<Schema>> {
        self.validator.as_ref()
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn params(&self) -> &[String] {
        &self.with_params
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("has_validator", &self.validator.is_some())
            .field("with_params", &self.with_params)
            .finish()
    }
}

/// A named group of endpoints; the group name becomes the path prefix.
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    name: String,
    endpoints: Vec<(String, Endpoint)>,
}

impl RouteGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoints: Vec::new(),
        }
    }

    /// Add a named endpoint. Declaration order is registration order.
    pub fn endpoint(mut self, name: impl Into<String>, endpoint: Endpoint) -> Self {
        self.endpoints.push((name.into(), endpoint));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoints(&self) -> &[(String, Endpoint)] {
        &self.endpoints
    }
}

/// The full API surface: an ordered list of groups.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    groups: Vec<RouteGroup>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: RouteGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde::Deserialize;
    use serde_json::json;

    fn noop_handler() -> Handler {
        handler(|_ctx| async { Ok(().into_response()) })
    }

    #[test]
    fn merged_overlays_params_on_body() {
        let ctx = RequestContext::new(
            json!({"name": "Ada", "id": "from-body"}),
            vec![("id".to_string(), "from-path".to_string())],
        );
        let merged = ctx.merged();
        assert_eq!(merged["name"], "Ada");
        assert_eq!(merged["id"], "from-path");
    }

    #[test]
    fn merged_tolerates_non_object_body() {
        let ctx = RequestContext::new(json!("scalar"), vec![("id".to_string(), "7".to_string())]);
        assert_eq!(ctx.merged(), json!({"id": "7"}));
    }

    #[test]
    fn param_lookup() {
        let ctx = RequestContext::new(json!({}), vec![("id".to_string(), "42".to_string())]);
        assert_eq!(ctx.param("id"), Some("42"));
        assert_eq!(ctx.param("missing"), None);
    }

    #[test]
    fn body_as_deserializes() {
        #[derive(Deserialize)]
        struct Body {
            name: String,
        }
        let ctx = RequestContext::new(json!({"name": "Ada"}), Vec::new());
        let body: Body = ctx.body_as().unwrap();
        assert_eq!(body.name, "Ada");
    }

    #[test]
    fn table_preserves_declaration_order() {
        let table = RouteTable::new()
            .group(
                RouteGroup::new("auth")
                    .endpoint("register", Endpoint::new(Method::Post, noop_handler()))
                    .endpoint("login", Endpoint::new(Method::Post, noop_handler())),
            )
            .group(RouteGroup::new("user").endpoint("getProfile", Endpoint::new(Method::Get, noop_handler())));

        let names: Vec<_> = table
            .groups()
            .iter()
            .flat_map(|g| g.endpoints().iter().map(move |(n, _)| format!("{}.{}", g.name(), n)))
            .collect();
        assert_eq!(names, vec!["auth.register", "auth.login", "user.getProfile"]);
    }
}
