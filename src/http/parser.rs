use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The request line is not exactly `<METHOD> <PATH> <VERSION>`.
    MalformedRequestLine,
    /// A header line has no colon.
    MalformedHeaderLine,
    /// No blank line separates the header block from the body.
    MissingHeaderTerminator,
    /// The request line or header block is not UTF-8.
    InvalidEncoding,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::MalformedRequestLine => "malformed request line",
            ParseError::MalformedHeaderLine => "malformed header line",
            ParseError::MissingHeaderTerminator => "missing blank line after headers",
            ParseError::InvalidEncoding => "request head is not valid UTF-8",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one request out of the bytes of a single read.
///
/// The request line runs up to the first CRLF. The rest must contain a
/// blank line: the header block comes before it and the body after it,
/// whether or not the body agrees with a `Content-Length` header. A request
/// with no header lines therefore has no blank line in the remainder and is
/// rejected.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = find(buf, b"\r\n").ok_or(ParseError::MissingHeaderTerminator)?;
    let (request_line, remain) = (&buf[..line_end], &buf[line_end + 2..]);

    let headers_end = find(remain, b"\r\n\r\n").ok_or(ParseError::MissingHeaderTerminator)?;
    let (header_block, body) = (&remain[..headers_end], &remain[headers_end + 4..]);

    let request_line = std::str::from_utf8(request_line).map_err(|_| ParseError::InvalidEncoding)?;
    let (method, path, version) = parse_request_line(request_line)?;

    let header_block = std::str::from_utf8(header_block).map_err(|_| ParseError::InvalidEncoding)?;
    let headers = parse_headers(header_block)?;

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: body.to_vec(),
        params: HashMap::new(),
    })
}

fn parse_request_line(line: &str) -> Result<(Method, &str, &str), ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    let &[method, path, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };
    let method = Method::from_str(method).ok_or(ParseError::MalformedRequestLine)?;
    Ok((method, path, version))
}

fn parse_headers(block: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut headers = HashMap::new();

    // An empty line inside the block has no colon and is rejected like any
    // other malformed line.
    for line in block.split("\r\n") {
        let (key, value) = line.split_once(':').ok_or(ParseError::MalformedHeaderLine)?;
        // Later duplicates overwrite earlier ones.
        headers.insert(key.to_string(), value.trim_start_matches(' ').to_string());
    }

    Ok(headers)
}

fn find(buf: &[u8], needle: &[u8]) -> Option<usize> {
    buf.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
        assert!(parsed.body.is_empty());
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn header_value_keeps_inner_spaces() {
        let req = b"GET / HTTP/1.1\r\nUser-Agent:   curl 8.0 \r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.header("User-Agent"), Some("curl 8.0 "));
    }
}
