use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::http::request::Request;
use crate::http::response::Response;
use crate::routing::router::View;

/// A view failed instead of producing a response.
#[derive(Debug)]
pub enum HandlerFailure {
    /// The view returned an error.
    Error(anyhow::Error),
    /// The view panicked.
    Panic(String),
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerFailure::Error(e) => write!(f, "view returned an error: {:#}", e),
            HandlerFailure::Panic(msg) => write!(f, "view panicked: {}", msg),
        }
    }
}

impl std::error::Error for HandlerFailure {}

/// Calls `view`, containing any failure so it cannot take the worker down.
pub fn dispatch(view: &View, request: &Request) -> Result<Response, HandlerFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| view(request))) {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) => Err(HandlerFailure::Error(e)),
        Err(payload) => Err(HandlerFailure::Panic(panic_message(payload))),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
