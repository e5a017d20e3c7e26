//! Response constructors.
//!
//! Handlers return plain `http::Response` values; these helpers cover the
//! three shapes this application sends. Construction goes through
//! `Response::new` plus mutators rather than the fallible builder, so none
//! of them can fail.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Response, StatusCode};
use http_body_util::Full;

/// The concrete response body type used throughout the crate.
pub type Body = Full<Bytes>;

/// `200 OK`, `text/html; charset=utf-8`.
pub fn html(body: String) -> Response<Body> {
    with_content_type("text/html; charset=utf-8", Bytes::from(body))
}

/// `200 OK`, `text/plain; charset=utf-8`.
pub fn text(body: &'static str) -> Response<Body> {
    with_content_type("text/plain; charset=utf-8", Bytes::from_static(body.as_bytes()))
}

/// A bare status code with an empty body.
pub fn status(code: StatusCode) -> Response<Body> {
    let mut res = Response::new(Full::new(Bytes::new()));
    *res.status_mut() = code;
    res
}

fn with_content_type(content_type: &'static str, body: Bytes) -> Response<Body> {
    let mut res = Response::new(Full::new(body));
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_ok_with_html_content_type() {
        let res = html("<p>hi</p>".to_owned());
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn text_is_ok_with_plain_content_type() {
        let res = text("ok");
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn status_carries_no_content_type() {
        let res = status(StatusCode::NOT_FOUND);
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.headers().get(CONTENT_TYPE).is_none());
    }
}
