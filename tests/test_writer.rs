use std::collections::HashMap;

use tollgate::http::request::{Method, Request, RequestBuilder};
use tollgate::http::response::{Response, ResponseBuilder, StatusCode};
use tollgate::http::writer::{ResponseWriter, serialize_response};

struct ClientView {
    status: u16,
    reason: String,
    header_order: Vec<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

/// Reads a response the way a client would: head up to the blank line,
/// then exactly Content-Length body bytes.
fn read_as_client(bytes: &[u8]) -> ClientView {
    let head_end = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let head = std::str::from_utf8(&bytes[..head_end]).unwrap();
    let mut lines = head.split("\r\n");

    let status_line = lines.next().unwrap();
    let mut parts = status_line.splitn(3, ' ');
    assert_eq!(parts.next(), Some("HTTP/1.1"));
    let status = parts.next().unwrap().parse().unwrap();
    let reason = parts.next().unwrap().to_string();

    let mut header_order = Vec::new();
    let mut headers = HashMap::new();
    for line in lines {
        let (k, v) = line.split_once(": ").unwrap();
        header_order.push(k.to_string());
        headers.insert(k.to_string(), v.to_string());
    }

    let length: usize = headers["Content-Length"].parse().unwrap();
    let body = bytes[head_end + 4..].to_vec();
    assert_eq!(body.len(), length);

    ClientView {
        status,
        reason,
        header_order,
        headers,
        body,
    }
}

fn get(path: &str) -> Request {
    RequestBuilder::new()
        .method(Method::GET)
        .path(path)
        .build()
        .unwrap()
}

#[test]
fn test_round_trip_with_explicit_content_type() {
    let body = b"{\"ok\":true}".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("application/json")
        .body(body.clone())
        .build();

    let view = read_as_client(&serialize_response(&response, &get("/api")));

    assert_eq!(view.status, 200);
    assert_eq!(view.reason, "OK");
    assert_eq!(view.headers["Content-Type"], "application/json");
    assert_eq!(view.body, body);
}

#[test]
fn test_round_trip_binary_body() {
    let body: Vec<u8> = (0u8..=255).collect();
    let response = Response::ok(body.clone());

    let view = read_as_client(&serialize_response(&response, &get("/logo.png")));

    assert_eq!(view.headers["Content-Type"], "image/png");
    assert_eq!(view.headers["Content-Length"], "256");
    assert_eq!(view.body, body);
}

#[test]
fn test_explicit_content_type_beats_extension() {
    let response = Response::html("<p>x</p>");

    let view = read_as_client(&serialize_response(&response, &get("/data.css")));

    assert_eq!(view.headers["Content-Type"], "text/html; charset=UTF-8");
}

#[test]
fn test_content_type_falls_back_to_octet_stream() {
    for path in ["/archive.tar", "/no-extension"] {
        let view = read_as_client(&serialize_response(&Response::ok("x"), &get(path)));
        assert_eq!(view.headers["Content-Type"], "application/octet-stream");
    }
}

#[test]
fn test_status_lines() {
    let not_found = read_as_client(&serialize_response(&Response::not_found(), &get("/x")));
    assert_eq!((not_found.status, not_found.reason.as_str()), (404, "Not Found"));

    let not_allowed = read_as_client(&serialize_response(
        &Response::method_not_allowed(),
        &get("/parameters"),
    ));
    assert_eq!(
        (not_allowed.status, not_allowed.reason.as_str()),
        (405, "Method Not Allowed")
    );
}

#[test]
fn test_header_order_and_fixed_values() {
    let view = read_as_client(&serialize_response(&Response::ok(""), &get("/")));

    assert_eq!(
        view.header_order,
        ["Date", "Host", "Content-Length", "Connection", "Content-Type"]
    );
    assert_eq!(view.headers["Connection"], "Close");
    assert_eq!(view.headers["Host"], "Tollgate/0.1");
    assert!(view.headers["Date"].ends_with(" GMT"));
    assert!(httpdate::parse_http_date(&view.headers["Date"]).is_ok());
    assert!(view.body.is_empty());
}

#[tokio::test]
async fn test_writer_writes_every_byte() {
    let response = Response::html("<h1>hello</h1>");
    let request = get("/");
    let expected_len = serialize_response(&response, &request).len();

    let mut writer = ResponseWriter::new(&response, &request);
    assert_eq!(writer.remaining(), expected_len);

    let mut sink: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut sink).await.unwrap();

    assert_eq!(writer.remaining(), 0);
    assert_eq!(sink.len(), expected_len);
    assert!(sink.ends_with(b"<h1>hello</h1>"));
}
