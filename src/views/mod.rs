//! The application's views and its route table.

mod pages;

use std::sync::Arc;

use crate::routing::Router;
use crate::template::Templates;

pub use pages::{now, parameters, show_request, user_profile};

/// Builds the route table served by the binary.
pub fn url_patterns(templates: Arc<Templates>) -> Router {
    let now_templates = Arc::clone(&templates);
    let profile_templates = templates;

    Router::new()
        .route("/now", move |req| now(req, &now_templates))
        .route("/show_request", show_request)
        .route("/parameters", parameters)
        .route("/user/<user_id>/profile", move |req| {
            user_profile(req, &profile_templates)
        })
}
