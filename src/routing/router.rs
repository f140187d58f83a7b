use std::collections::HashMap;
use std::sync::Arc;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::pattern::Pattern;

/// A view turns a request into a response. Returning an error (or
/// panicking) aborts the connection without a response.
pub type View = Arc<dyn Fn(&Request) -> anyhow::Result<Response> + Send + Sync>;

pub struct Route {
    pub pattern: Pattern,
    pub view: View,
}

/// Outcome of a successful lookup.
pub struct Resolved {
    pub view: View,
    pub params: HashMap<String, String>,
}

/// Ordered route table. Built once at startup, read-only afterwards.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. Earlier registrations take precedence.
    pub fn route<F>(mut self, pattern: &str, view: F) -> Self
    where
        F: Fn(&Request) -> anyhow::Result<Response> + Send + Sync + 'static,
    {
        self.routes.push(Route {
            pattern: Pattern::parse(pattern),
            view: Arc::new(view),
        });
        self
    }

    /// Finds the first route matching `path`.
    pub fn resolve(&self, path: &str) -> Option<Resolved> {
        self.routes.iter().find_map(|route| {
            route.pattern.matches(path).map(|params| Resolved {
                view: Arc::clone(&route.view),
                params,
            })
        })
    }
}
