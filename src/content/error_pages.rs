//! Themed error page content, one entry per handled HTTP error.

use serde::Serialize;

use crate::content::utils::classify::resolve_asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 3] = [
        ErrorKind::BadRequest,
        ErrorKind::NotFound,
        ErrorKind::InternalServerError,
    ];

    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
        }
    }

    pub fn from_status(code: u16) -> Option<ErrorKind> {
        match code {
            400 => Some(ErrorKind::BadRequest),
            404 => Some(ErrorKind::NotFound),
            500 => Some(ErrorKind::InternalServerError),
            _ => None,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }

    /// Page content for this error
    pub fn content(&self) -> ErrorContent {
        let (file, message) = match self {
            ErrorKind::BadRequest => (
                "400.png",
                "Sorry, there was an issue with your request. Please check and try again.",
            ),
            ErrorKind::NotFound => ("404.png", "Nothing to see here"),
            ErrorKind::InternalServerError => (
                "500.png",
                "Oops! Something went wrong on our end. We're working to fix it. Please try again later.",
            ),
        };
        ErrorContent {
            status: self.status_code(),
            heading: format!("{} {}", self.status_code(), self.reason()),
            image_src: resolve_asset(file, "images/errors"),
            image_alt: format!("{} {}", self.status_code(), self.reason()),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContent {
    pub status: u16,
    pub heading: String,
    pub image_src: String,
    pub image_alt: String,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_content_matches_status() {
        for kind in ErrorKind::ALL {
            let content = kind.content();
            assert_eq!(content.status, kind.status_code());
            assert_eq!(ErrorKind::from_status(content.status), Some(kind));
            assert!(content.image_src.ends_with(&format!("/errors/{}.png", content.status)));
            assert!(!content.message.is_empty());
        }
    }

    #[test]
    fn test_not_found_alt_text() {
        assert_eq!(ErrorKind::NotFound.content().image_alt, "404 Not Found");
        assert_eq!(ErrorKind::from_status(418), None);
    }
}
