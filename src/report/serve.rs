use std::io::Cursor;

use tiny_http::{Header, Method, Response, Server, StatusCode};
use tracing::{debug, info, warn};

/// The rendered artefacts the display server hands out.
#[derive(Debug, Clone)]
pub struct ReportPages {
    pub index_html: String,
    pub cost_svg: String,
    pub prediction_svg: String,
    pub costs_json: String,
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn response(status: u16, content_type: &str, body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    let mut headers = Vec::new();
    if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
        headers.push(h);
    }
    Response::new(StatusCode(status), headers, Cursor::new(bytes), Some(len), None)
}

/// Maps a request to a response. Only `GET` is served.
pub fn route(method: &Method, url: &str, pages: &ReportPages) -> Response<Cursor<Vec<u8>>> {
    let path = url.split('?').next().unwrap_or("");
    match (method, path) {
        (Method::Get, "/") | (Method::Get, "/index.html") =>
            response(200, "text/html; charset=utf-8", pages.index_html.clone()),
        (Method::Get, "/cost.svg") =>
            response(200, "image/svg+xml", pages.cost_svg.clone()),
        (Method::Get, "/prediction.svg") =>
            response(200, "image/svg+xml", pages.prediction_svg.clone()),
        (Method::Get, "/costs.json") =>
            response(200, "application/json", pages.costs_json.clone()),
        (Method::Get, _) => response(404, "text/plain", "404 Not Found".into()),
        _ => response(405, "text/plain", "405 Method Not Allowed".into()),
    }
}

/// Serves the report on `addr` until the process is interrupted.
///
/// Requests are handled one at a time on the calling thread.
pub fn serve(addr: &str, pages: &ReportPages) -> std::io::Result<()> {
    let server = Server::http(addr)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AddrNotAvailable, e.to_string()))?;

    info!("report available at http://{}", addr);

    for request in server.incoming_requests() {
        debug!(method = %request.method(), url = request.url(), "request");
        let resp = route(request.method(), request.url(), pages);
        if let Err(e) = request.respond(resp) {
            warn!(error = %e, "failed to send response");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> ReportPages {
        ReportPages {
            index_html: "<html></html>".into(),
            cost_svg: "<svg>cost</svg>".into(),
            prediction_svg: "<svg>pred</svg>".into(),
            costs_json: "{\"costs\":[]}".into(),
        }
    }

    #[test]
    fn known_paths_are_served() {
        let p = pages();
        assert_eq!(route(&Method::Get, "/", &p).status_code(), StatusCode(200));
        assert_eq!(route(&Method::Get, "/cost.svg?x=1", &p).status_code(), StatusCode(200));
        assert_eq!(route(&Method::Get, "/prediction.svg", &p).status_code(), StatusCode(200));
        assert_eq!(route(&Method::Get, "/costs.json", &p).status_code(), StatusCode(200));
    }

    #[test]
    fn unknown_paths_and_methods_are_rejected() {
        let p = pages();
        assert_eq!(route(&Method::Get, "/nope", &p).status_code(), StatusCode(404));
        assert_eq!(route(&Method::Post, "/", &p).status_code(), StatusCode(405));
    }
}
