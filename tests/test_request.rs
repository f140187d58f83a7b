use tollgate::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
        params: HashMap::new(),
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_case_sensitive() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("Host", "example.com")
        .build()
        .unwrap();

    assert_eq!(req.header("host"), None);
}

#[test]
fn test_request_extension() {
    let cases = [
        ("/index.html", "html"),
        ("/css/site.min.css", "css"),
        ("/now", ""),
        ("/", ""),
    ];

    for (path, ext) in cases {
        let req = RequestBuilder::new().method(Method::GET).path(path).build().unwrap();
        assert_eq!(req.extension(), ext, "path {}", path);
    }
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/parameters")
        .body("name=foo")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.body, b"name=foo".to_vec());
    assert!(req.params.is_empty());
    assert_eq!(req.param("user_id"), None);
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert_eq!(RequestBuilder::new().path("/").build().unwrap_err(), "method missing");
    assert_eq!(
        RequestBuilder::new().method(Method::GET).build().unwrap_err(),
        "path missing"
    );
}

#[test]
fn test_method_round_trips_through_str() {
    for token in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "BREW"] {
        assert_eq!(Method::from_str(token).unwrap().as_str(), token);
    }
    assert_eq!(Method::from_str(""), None);
}
