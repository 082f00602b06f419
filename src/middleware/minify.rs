use axum::{
    body::{Body, HttpBody},
    response::Response,
};

/// Rendered pages stay well under this; larger or unsized bodies are passed through untouched.
const MAX_HTML_BYTES: usize = 2 * 1024 * 1024;

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

/// Whether the body is known to hold at most `limit` bytes without reading it.
#[cfg_attr(debug_assertions, allow(dead_code))]
fn fits_limit(response: &Response<Body>, limit: usize) -> bool {
    response
        .body()
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= limit as u64)
}

/// Minifies `text/html` responses, full pages and fragments alike.
///
/// Only active in release builds so templates stay readable while developing.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok())
                .is_some_and(|content_type| content_type.starts_with("text/html"));

            if is_html && fits_limit(&response, MAX_HTML_BYTES) {
                let (mut parts, body) = response.into_parts();

                return match to_bytes(body, MAX_HTML_BYTES).await {
                    Ok(bytes) => {
                        let minified = minify_html::minify(&bytes, &MINIFY_CFG);
                        parts.headers.remove(header::CONTENT_LENGTH);
                        Response::from_parts(parts, Body::from(minified))
                    }
                    Err(err) => {
                        tracing::error!("Failed to read html body for minification: {err}");
                        parts.status = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
                        parts.headers.remove(header::CONTENT_LENGTH);
                        Response::from_parts(
                            parts,
                            Body::from(crate::template::SERVER_ERROR_MESSAGE),
                        )
                    }
                };
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::{Html, IntoResponse};
    use futures::stream;
    use http_body_util::BodyExt;

    #[test]
    fn test_fits_limit_uses_exact_size() {
        let small = Html("<p>ok</p>").into_response();
        assert!(fits_limit(&small, MAX_HTML_BYTES));

        let large = Html("x".repeat(MAX_HTML_BYTES + 1)).into_response();
        assert!(!fits_limit(&large, MAX_HTML_BYTES));
    }

    #[test]
    fn test_unsized_body_does_not_fit() {
        let chunks = stream::iter([Ok::<_, std::io::Error>("<p>streamed</p>")]);
        let response = Response::new(Body::from_stream(chunks));

        assert!(!fits_limit(&response, MAX_HTML_BYTES));
    }

    #[tokio::test]
    async fn test_oversized_page_passes_through() -> anyhow::Result<()> {
        let page = format!("<p>{}</p>", "x".repeat(MAX_HTML_BYTES));
        let response = minify_html_middleware(Html(page.clone()).into_response()).await;

        let body = response.into_body().collect().await?.to_bytes();
        assert_eq!(body.len(), page.len());

        Ok(())
    }
}
