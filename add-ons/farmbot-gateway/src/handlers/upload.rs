//! Image and voice uploads: `POST /api/upload-image` (field `image`) and
//! `POST /api/upload-voice` (field `voice`).
//!
//! The file's original name is the only thing the matcher sees. The bytes are
//! size-checked, stored, and otherwise ignored.

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use farmbot_core::Category;

use super::MatchEnvelope;
use crate::error::ApiError;
use crate::AppState;

const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "ogg", "m4a", "webm"];

/// The two upload endpoints and the multipart field each one accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadKind {
    Image,
    Voice,
}

impl UploadKind {
    fn from_field(name: &str) -> Option<Self> {
        match name {
            "image" => Some(Self::Image),
            "voice" => Some(Self::Voice),
            _ => None,
        }
    }

    fn category(self) -> Category {
        match self {
            Self::Image => Category::Image,
            Self::Voice => Category::Voice,
        }
    }

    /// Images must declare an `image/*` type; audio may instead carry a known extension.
    fn accepts(self, content_type: Option<&str>, file_name: &str) -> bool {
        let content_type = content_type.unwrap_or("").to_ascii_lowercase();
        match self {
            Self::Image => content_type.starts_with("image/"),
            Self::Voice => content_type.starts_with("audio/") || has_audio_extension(file_name),
        }
    }

    fn rejected_type_message(self) -> &'static str {
        match self {
            Self::Image => "Only image files are allowed for image upload",
            Self::Voice => "Only audio files are allowed for voice upload",
        }
    }

    fn missing_file_message(self) -> &'static str {
        match self {
            Self::Image => "No image file provided",
            Self::Voice => "No voice file provided",
        }
    }
}

fn has_audio_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// A validated file field read fully into memory.
struct UploadedFile {
    original_name: String,
    bytes: Vec<u8>,
}

pub(crate) async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MatchEnvelope>, ApiError> {
    handle_upload(state, multipart, UploadKind::Image).await
}

pub(crate) async fn upload_voice(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MatchEnvelope>, ApiError> {
    handle_upload(state, multipart, UploadKind::Voice).await
}

async fn handle_upload(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
    kind: UploadKind,
) -> Result<Json<MatchEnvelope>, ApiError> {
    // A request that is not multipart at all simply carries no file.
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(target: "farmbot::gateway", error = %rejection, "Multipart rejected");
        ApiError::bad_request(kind.missing_file_message())
    })?;

    let file = read_single_file(&mut multipart, kind, &state)
        .await?
        .ok_or_else(|| ApiError::bad_request(kind.missing_file_message()))?;

    tracing::info!(
        target: "farmbot::gateway",
        kind = %kind.category(),
        filename = %file.original_name,
        bytes = file.bytes.len(),
        "Upload received"
    );
    state.uploads.save(&file.original_name, &file.bytes).await?;

    let lookup = file.original_name.to_lowercase();
    let found = state.matcher.match_input(&lookup, kind.category());
    tracing::debug!(target: "farmbot::matcher", stage = ?found.stage, "Upload matched");

    Ok(Json(MatchEnvelope::new(
        kind.category(),
        found.response,
        Some(file.original_name),
    )))
}

/// Reads the one file field `kind` expects. Plain text fields are skipped.
async fn read_single_file(
    multipart: &mut Multipart,
    kind: UploadKind,
    state: &AppState,
) -> Result<Option<UploadedFile>, ApiError> {
    let limit = state.config.max_upload_bytes;
    let too_large = || ApiError::FileTooLarge {
        limit: state.config.max_upload_label(),
    };
    let mut accepted: Option<UploadedFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, too_large))?
    {
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let field_kind = field
            .name()
            .and_then(UploadKind::from_field)
            .ok_or_else(|| ApiError::bad_request("Invalid field name"))?;
        if field_kind != kind || accepted.is_some() {
            return Err(ApiError::bad_request("Unexpected field"));
        }
        if !kind.accepts(field.content_type(), &original_name) {
            return Err(ApiError::bad_request(kind.rejected_type_message()));
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, too_large))?
        {
            if bytes.len() + chunk.len() > limit {
                return Err(too_large());
            }
            bytes.extend_from_slice(&chunk);
        }
        accepted = Some(UploadedFile {
            original_name,
            bytes,
        });
    }
    Ok(accepted)
}

/// Body-limit failures surface as 413 from the multipart parser.
fn multipart_error(e: MultipartError, too_large: impl Fn() -> ApiError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        ApiError::bad_request(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_requires_image_content_type() {
        assert!(UploadKind::Image.accepts(Some("image/jpeg"), "a.jpg"));
        assert!(UploadKind::Image.accepts(Some("IMAGE/PNG"), "a.png"));
        assert!(!UploadKind::Image.accepts(Some("text/plain"), "a.jpg"));
        assert!(!UploadKind::Image.accepts(None, "a.jpg"));
    }

    #[test]
    fn voice_accepts_audio_type_or_extension() {
        assert!(UploadKind::Voice.accepts(Some("audio/mpeg"), "clip"));
        assert!(UploadKind::Voice.accepts(Some("application/octet-stream"), "Clip.M4A"));
        assert!(UploadKind::Voice.accepts(None, "note.webm"));
        assert!(!UploadKind::Voice.accepts(Some("video/mp4"), "clip.mp4"));
        assert!(!UploadKind::Voice.accepts(None, "wav"));
    }

    #[test]
    fn only_known_field_names_map_to_kinds() {
        assert_eq!(UploadKind::from_field("image"), Some(UploadKind::Image));
        assert_eq!(UploadKind::from_field("voice"), Some(UploadKind::Voice));
        assert_eq!(UploadKind::from_field("Image"), None);
        assert_eq!(UploadKind::from_field("audio"), None);
    }
}
