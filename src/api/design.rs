//! Design endpoints
//!
//! POST /api/generate-image - bouquet image, composite preview or suggestions
//! POST /api/generate       - decorate an uploaded photo

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use super::AppState;
use crate::error::{DesignError, ErrorResponse};
use crate::images::ImageOutput;
use crate::selection::SelectionInput;
use crate::studio::{DesignMode, DesignOutcome, UploadFields};
use crate::suggestion::Suggestion;
use crate::vocabulary::RawList;

/// Generate-image request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub basket_image: Option<String>,
    pub flower_images: Option<Vec<String>>,
    pub image: Option<String>,
    pub mime_type: Option<String>,
    #[serde(flatten)]
    pub selection: SelectionInput,
}

impl GenerateImageRequest {
    fn uploads(&self) -> UploadFields<'_> {
        UploadFields {
            basket_image: self.basket_image.as_deref(),
            flower_images: self.flower_images.as_deref(),
            image: self.image.as_deref(),
            mime_type: self.mime_type.as_deref(),
        }
    }
}

/// Decorate request body
#[derive(Debug, Default, Deserialize)]
pub struct DecorateRequest {
    pub image: Option<String>,
    pub style: Option<RawList>,
    pub mask: Option<String>,
}

#[derive(Serialize)]
struct ImageResponse {
    success: bool,
    image: ImageOutput,
}

#[derive(Serialize)]
struct SuggestionResponse {
    success: bool,
    suggestions: Suggestion,
}

/// Parse a JSON body whatever its declared content type; the wizard
/// posts without a `Content-Type` header
fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, Response> {
    let bytes = body.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
            .into_response()
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        DesignError::validation(format!("Invalid JSON body: {}", e)).into_response()
    })
}

fn image_response(image: ImageOutput) -> Response {
    Json(ImageResponse {
        success: true,
        image,
    })
    .into_response()
}

pub async fn generate_image(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let req: GenerateImageRequest = match parse_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let mode = DesignMode::classify(req.uploads(), &req.selection);
    match state.studio.run(mode).await {
        Ok(DesignOutcome::Image(image)) => image_response(image),
        Ok(DesignOutcome::Suggestions(suggestions)) => Json(SuggestionResponse {
            success: true,
            suggestions,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn decorate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let req: DecorateRequest = match parse_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match state
        .studio
        .decorate(req.image.as_deref(), req.style.as_ref(), req.mask.as_deref())
        .await
    {
        Ok(image) => image_response(image),
        Err(e) => error_response(e),
    }
}

fn error_response(e: DesignError) -> Response {
    if e.status().is_server_error() {
        warn!("Design request failed: {}", e);
    }
    e.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_body_ignores_content_type() {
        let body = Bytes::from_static(br#"{"image":"AAA=","style":"rose"}"#);
        let req: DecorateRequest = parse_body(Ok(body)).unwrap();
        assert_eq!(req.image.as_deref(), Some("AAA="));
        assert_eq!(req.style, Some(RawList::from("rose")));
    }

    #[test]
    fn test_parse_body_invalid_json_is_bad_request() {
        let body = Bytes::from_static(b"{not json");
        let response = parse_body::<DecorateRequest>(Ok(body)).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
