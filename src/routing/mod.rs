//! Path-to-view resolution and view invocation.
//!
//! Routes are matched in registration order and the first hit wins. A
//! pattern is either a literal path or a template with `<name>` segments:
//!
//! ```
//! # use tollgate::routing::Router;
//! # use tollgate::http::response::Response;
//! let router = Router::new()
//!     .route("/now", |_req| Ok(Response::html("now")))
//!     .route("/user/<user_id>/profile", |req| {
//!         Ok(Response::html(req.param("user_id").unwrap_or_default().to_string()))
//!     });
//!
//! let resolved = router.resolve("/user/42/profile").unwrap();
//! assert_eq!(resolved.params["user_id"], "42");
//! assert!(router.resolve("/user/42").is_none());
//! ```

pub mod dispatch;
pub mod pattern;
pub mod router;

pub use dispatch::{dispatch, HandlerFailure};
pub use pattern::Pattern;
pub use router::{Resolved, Route, Router, View};
