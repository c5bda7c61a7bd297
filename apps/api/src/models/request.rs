use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;

/// Body shared by `/generate-post` and `/generate-ai`.
#[derive(Debug, Default, Deserialize)]
pub struct HeadlineRequest {
    pub headline: Option<String>,
}

impl HeadlineRequest {
    /// Treats an absent or unparseable JSON body as a body without a headline.
    pub fn from_body(body: Option<Json<HeadlineRequest>>) -> Self {
        body.map(|Json(request)| request).unwrap_or_default()
    }

    /// The headline, rejected with a 400 when missing or blank.
    pub fn require_headline(&self) -> Result<&str, AppError> {
        self.headline
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Headline is required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_headline_accepts_text() {
        let request = HeadlineRequest {
            headline: Some("Road closed".to_string()),
        };
        assert_eq!(request.require_headline().unwrap(), "Road closed");
    }

    #[test]
    fn test_require_headline_rejects_missing_and_blank() {
        for headline in [None, Some(String::new()), Some("   ".to_string())] {
            let request = HeadlineRequest { headline };
            assert!(matches!(
                request.require_headline(),
                Err(AppError::Validation(msg)) if msg == "Headline is required"
            ));
        }
    }

    #[test]
    fn test_missing_body_means_missing_headline() {
        let request = HeadlineRequest::from_body(None);
        assert!(request.headline.is_none());
    }
}
