use tollgate::http::response::{HTML, Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, None);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_with_content_type() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .body("test")
        .build();

    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
    assert_eq!(response.body, b"test".to_vec());
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
}

#[test]
fn test_response_ok_leaves_content_type_open() {
    let response = Response::ok(b"test content".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, None);
}

#[test]
fn test_response_html_helper() {
    let response = Response::html("<p>hi</p>");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type.as_deref(), Some(HTML));
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.content_type.as_deref(), Some(HTML));
    assert!(String::from_utf8(response.body).unwrap().contains("404"));
}

#[test]
fn test_response_method_not_allowed_helper() {
    let response = Response::method_not_allowed();

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
    assert!(String::from_utf8(response.body).unwrap().contains("405"));
}
