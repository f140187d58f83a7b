use std::mem;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::App;
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routing::{dispatch, View};

/// Size of the single read a worker performs.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Owns one accepted connection and runs it through the request pipeline
/// exactly once.
pub struct Worker<S> {
    stream: S,
    peer: SocketAddr,
    app: Arc<App>,
    state: WorkerState,
}

pub enum WorkerState {
    Reading,
    Parsing(Vec<u8>),
    Resolving(Request),
    Dispatching(Request, View),
    Building(Request, Response),
    Sending(ResponseWriter),
    Closed,
}

impl WorkerState {
    fn name(&self) -> &'static str {
        match self {
            WorkerState::Reading => "reading",
            WorkerState::Parsing(_) => "parsing",
            WorkerState::Resolving(_) => "resolving",
            WorkerState::Dispatching(..) => "dispatching",
            WorkerState::Building(..) => "building",
            WorkerState::Sending(_) => "sending",
            WorkerState::Closed => "closed",
        }
    }
}

impl<S> Worker<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, app: Arc<App>) -> Self {
        Self {
            stream,
            peer,
            app,
            state: WorkerState::Reading,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// A failure in any state is logged and ends the connection without a
    /// response. The stream is dropped when this returns, on every path.
    pub async fn run(mut self) {
        loop {
            let state = mem::replace(&mut self.state, WorkerState::Closed);
            let stage = state.name();

            let next = match state {
                WorkerState::Closed => break,
                other => self.step(other).await,
            };

            self.state = match next {
                Ok(next) => next,
                Err(e) => {
                    let error = format!("{:#}", e);
                    if is_protocol_error(&e) {
                        tracing::warn!(peer = %self.peer, stage, error = %error, "Malformed request");
                    } else {
                        tracing::error!(peer = %self.peer, stage, error = %error, "Connection failed");
                    }
                    WorkerState::Closed
                }
            };
        }

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Shutdown failed");
        }
        tracing::info!(peer = %self.peer, "Closing connection");
    }

    async fn step(&mut self, state: WorkerState) -> anyhow::Result<WorkerState> {
        let next = match state {
            WorkerState::Reading => {
                let mut buf = vec![0u8; READ_BUFFER_SIZE];
                let n = self.stream.read(&mut buf).await?;

                if n == 0 {
                    tracing::debug!(peer = %self.peer, "Client closed before sending a request");
                    WorkerState::Closed
                } else {
                    buf.truncate(n);
                    WorkerState::Parsing(buf)
                }
            }

            WorkerState::Parsing(buf) => WorkerState::Resolving(parse_http_request(&buf)?),

            WorkerState::Resolving(mut request) => match self.app.router.resolve(&request.path) {
                Some(resolved) => {
                    request.params = resolved.params;
                    WorkerState::Dispatching(request, resolved.view)
                }
                None => {
                    let response = match self.app.static_files.get_file(&request.path).await {
                        Some(body) => Response::ok(body),
                        None => Response::not_found(),
                    };
                    WorkerState::Building(request, response)
                }
            },

            WorkerState::Dispatching(request, view) => match dispatch(&view, &request) {
                Ok(response) => WorkerState::Building(request, response),
                Err(failure) => {
                    tracing::error!(
                        peer = %self.peer,
                        method = %request.method,
                        path = %request.path,
                        error = ?failure,
                        "View failed"
                    );
                    WorkerState::Closed
                }
            },

            WorkerState::Building(request, response) => {
                tracing::info!(
                    peer = %self.peer,
                    method = %request.method,
                    path = %request.path,
                    status = response.status.as_u16(),
                    "Responding"
                );
                WorkerState::Sending(ResponseWriter::new(&response, &request))
            }

            WorkerState::Sending(mut writer) => {
                writer.write_to_stream(&mut self.stream).await?;
                WorkerState::Closed
            }

            WorkerState::Closed => WorkerState::Closed,
        };

        Ok(next)
    }
}

/// Bad bytes from the client, as opposed to a failing socket.
fn is_protocol_error(e: &anyhow::Error) -> bool {
    e.downcast_ref::<ParseError>().is_some()
}
