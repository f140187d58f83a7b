use std::time::SystemTime;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";
const SERVER_IDENT: &str = "Tollgate/0.1";

/// Frames a response as HTTP/1.1 bytes.
///
/// Headers always come out in the same order: Date, Host, Content-Length,
/// Connection, Content-Type. The request is only consulted for the path
/// extension when the response has no Content-Type of its own.
pub fn serialize_response(resp: &Response, req: &Request) -> Bytes {
    serialize_at(resp, req, SystemTime::now())
}

fn serialize_at(resp: &Response, req: &Request, now: SystemTime) -> Bytes {
    let content_type = resp
        .content_type
        .as_deref()
        .unwrap_or_else(|| mime::content_type_for(req.extension()));

    let head = format!(
        "{} {} {}\r\n\
         Date: {}\r\n\
         Host: {}\r\n\
         Content-Length: {}\r\n\
         Connection: Close\r\n\
         Content-Type: {}\r\n\
         \r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase(),
        httpdate::fmt_http_date(now),
        SERVER_IDENT,
        resp.body.len(),
        content_type,
    );

    let mut buf = BytesMut::with_capacity(head.len() + resp.body.len());
    buf.put_slice(head.as_bytes());
    buf.put_slice(&resp.body);
    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn new(response: &Response, request: &Request) -> Self {
        Self {
            buffer: serialize_response(response, request),
        }
    }

    /// Bytes still waiting to be written.
    pub fn remaining(&self) -> usize {
        self.buffer.remaining()
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.buffer.has_remaining() {
            let n = stream.write(self.buffer.chunk()).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.buffer.advance(n);
        }

        stream.flush().await?;
        Ok(())
    }
}
