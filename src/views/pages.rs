use std::collections::BTreeMap;
use std::time::SystemTime;

use anyhow::Context;

use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::template::Templates;

/// Current server time.
pub fn now(_req: &Request, templates: &Templates) -> anyhow::Result<Response> {
    let now = httpdate::fmt_http_date(SystemTime::now());
    let html = templates.render("now.html", &[("now", now.as_str())])?;
    Ok(Response::html(html))
}

/// Echoes the request line, headers and body back as HTML.
pub fn show_request(req: &Request) -> anyhow::Result<Response> {
    let headers: BTreeMap<&String, &String> = req.headers.iter().collect();
    let html = format!(
        "<html>\n\
         <body>\n\
         <h1>Request Line:</h1>\n\
         <p>{} {} {}</p>\n\
         <h1>Headers:</h1>\n\
         <pre>{:#?}</pre>\n\
         <h1>Body:</h1>\n\
         <pre>{}</pre>\n\
         </body>\n\
         </html>\n",
        req.method,
        req.path,
        req.version,
        headers,
        String::from_utf8_lossy(&req.body),
    );
    Ok(Response::html(html))
}

/// Lists urlencoded POST fields. Any other method gets 405.
///
/// A body that is not UTF-8 is an error rather than being decoded lossily.
pub fn parameters(req: &Request) -> anyhow::Result<Response> {
    if req.method != Method::POST {
        return Ok(Response::method_not_allowed());
    }

    let body = std::str::from_utf8(&req.body).context("form body is not valid UTF-8")?;
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params.entry(key.into_owned()).or_default().push(value.into_owned());
    }

    let html = format!(
        "<html>\n\
         <body>\n\
         <h1>Parameters:</h1>\n\
         <pre>{:?}</pre>\n\
         </body>\n\
         </html>\n",
        params,
    );
    Ok(Response::html(html))
}

/// Profile page for the user bound from the path.
pub fn user_profile(req: &Request, templates: &Templates) -> anyhow::Result<Response> {
    let user_id = req.param("user_id").context("route did not bind user_id")?;
    let html = templates.render("user_profile.html", &[("user_id", user_id)])?;
    Ok(Response::html(html))
}
