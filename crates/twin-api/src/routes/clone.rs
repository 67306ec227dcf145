//! Voice cloning endpoints.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vapi_client::{CloneStatus, CreatedClone, UploadedSample, VoicePreview};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Filename used when the upload does not carry one.
const DEFAULT_FILENAME: &str = "voice_sample.mp3";

#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CloneCreateRequest {
    pub voice_sample_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub voice_id: String,
    pub text: String,
}

/// Upload a voice sample from the multipart `file` field.
///
/// The description may be sent as a query parameter or a `description`
/// form field.
pub async fn upload(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadedSample>> {
    let mut audio: Option<(String, Vec<u8>)> = None;
    let mut description = query.description;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .filter(|f| !f.is_empty())
                    .unwrap_or(DEFAULT_FILENAME)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid file upload: {}", e)))?;
                audio = Some((filename, bytes.to_vec()));
            }
            Some("description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid description: {}", e)))?;
                description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        audio.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let sample = state
        .clones
        .upload(bytes, &filename, description.as_deref())
        .await
        .map_err(|e| ApiError::upstream("upload voice sample", e))?;

    Ok(Json(sample))
}

/// Create a voice clone from an uploaded sample.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CloneCreateRequest>,
) -> Result<Json<CreatedClone>> {
    let clone = state
        .clones
        .create_clone(&req.voice_sample_id, req.name.as_deref())
        .await
        .map_err(|e| ApiError::upstream("create voice clone", e))?;

    Ok(Json(clone))
}

/// Get the status of a voice clone.
pub async fn status(
    State(state): State<AppState>,
    Path(clone_id): Path<String>,
) -> Result<Json<CloneStatus>> {
    let status = state
        .clones
        .get_status(&clone_id)
        .await
        .map_err(|e| ApiError::upstream("get clone status", e))?;

    Ok(Json(status))
}

/// Synthesize a short preview with a voice.
pub async fn preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<VoicePreview>> {
    let preview = state
        .clones
        .preview(&req.voice_id, &req.text)
        .await
        .map_err(|e| ApiError::upstream("preview voice", e))?;

    Ok(Json(preview))
}
