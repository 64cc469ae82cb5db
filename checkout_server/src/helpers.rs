use actix_web::HttpRequest;

/// Synthesises a return URL from the inbound request's own scheme and host when the client did
/// not supply one. `connection_info` honours the standard forwarding headers, so this works
/// behind a proxy too.
pub fn default_return_url(req: &HttpRequest, path: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}/{path}", info.scheme(), info.host())
}

/// The scheme-and-host of the page hosting the widget, used as the 3DS `origin`. Derived from
/// the inbound request rather than hard-coded.
pub fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}
