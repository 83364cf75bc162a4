// Themed error pages (400 / 404 / 500)

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::content::error_pages::{ErrorContent, ErrorKind};
use crate::content::view_models::{PageContext, PageLayout, SiteChrome};

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate<'a> {
    pub chrome: &'a SiteChrome,
    pub page: PageContext<ErrorContent>,
}

/// Render the themed page for `kind` with its matching status code.
///
/// Never fails: if the template itself breaks, a plain-text body is sent
/// with the same status.
pub fn error_page(chrome: &SiteChrome, kind: ErrorKind) -> Response {
    let status = StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let template = ErrorTemplate {
        chrome,
        page: PageContext {
            layout: PageLayout::error(kind.reason()),
            content: kind.content(),
        },
    };

    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Error template failed to render: {}", e);
            (status, kind.reason()).into_response()
        }
    }
}
