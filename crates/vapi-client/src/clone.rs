//! Voice cloning operations.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::client::VapiClient;
use crate::error::VapiError;
use crate::types::{CloneStatus, CreatedClone, UploadedSample, VoicePreview};

/// Upload, clone and preview voices.
///
/// Each operation is a single direct call. Failures are returned as
/// [`VapiError`] with the provider's error body.
#[derive(Debug, Clone)]
pub struct VoiceClones {
    client: VapiClient,
}

impl VoiceClones {
    pub fn new(client: VapiClient) -> Self {
        Self { client }
    }

    /// Upload a voice sample.
    pub async fn upload(
        &self,
        audio: Vec<u8>,
        filename: &str,
        description: Option<&str>,
    ) -> Result<UploadedSample, VapiError> {
        self.ensure_configured()?;

        let part = Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str(content_type_for(filename))?;
        let mut form = Form::new().part("file", part);
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            form = form.text("description", description.to_string());
        }

        let response = self.client.post_multipart("/v1/voices", form).await?;
        let sample = UploadedSample::from_provider(&response, filename);
        info!(sample = %sample.voice_sample_id, filename = %filename, "Voice sample uploaded");
        Ok(sample)
    }

    /// Request a clone of an uploaded sample.
    pub async fn create_clone(
        &self,
        sample_id: &str,
        name: Option<&str>,
    ) -> Result<CreatedClone, VapiError> {
        self.ensure_configured()?;

        let mut body = Map::new();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            body.insert("name".to_string(), json!(name));
        }

        let endpoint = format!("/v1/voices/{}/clone", urlencoding::encode(sample_id));
        let response = self
            .client
            .request(Method::POST, &endpoint, Some(&Value::Object(body)))
            .await?;
        Ok(CreatedClone::from_provider(&response))
    }

    /// Get the processing state of a clone.
    pub async fn get_status(&self, clone_id: &str) -> Result<CloneStatus, VapiError> {
        self.ensure_configured()?;

        let endpoint = format!("/v1/voices/{}", urlencoding::encode(clone_id));
        let response = self.client.request(Method::GET, &endpoint, None).await?;
        Ok(CloneStatus::from_provider(&response, clone_id))
    }

    /// Synthesize `text` with a voice.
    pub async fn preview(&self, voice_id: &str, text: &str) -> Result<VoicePreview, VapiError> {
        self.ensure_configured()?;

        let endpoint = format!("/v1/voices/{}/preview", urlencoding::encode(voice_id));
        let body = json!({ "text": text });
        let response = self.client.request(Method::POST, &endpoint, Some(&body)).await?;
        Ok(VoicePreview::from_provider(&response))
    }

    fn ensure_configured(&self) -> Result<(), VapiError> {
        if self.client.is_configured() {
            Ok(())
        } else {
            Err(VapiError::Config("PRIVATE_API_KEY is not set".to_string()))
        }
    }
}

/// Audio content type for an uploaded file name.
pub fn content_type_for(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".wav") {
        "audio/wav"
    } else if lower.ends_with(".m4a") {
        "audio/m4a"
    } else {
        "audio/mpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VapiConfig;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("sample.wav"), "audio/wav");
        assert_eq!(content_type_for("SAMPLE.WAV"), "audio/wav");
        assert_eq!(content_type_for("memo.m4a"), "audio/m4a");
        assert_eq!(content_type_for("song.mp3"), "audio/mpeg");
        assert_eq!(content_type_for("recording.ogg"), "audio/mpeg");
        assert_eq!(content_type_for("noextension"), "audio/mpeg");
    }

    #[tokio::test]
    async fn test_unconfigured_clone_calls_fail() {
        let clones = VoiceClones::new(VapiClient::new(VapiConfig::default()).unwrap());

        let err = clones.get_status("clone-1").await.unwrap_err();
        assert!(matches!(err, VapiError::Config(_)));

        let err = clones
            .upload(vec![1, 2, 3], "me.wav", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("PRIVATE_API_KEY"));
    }
}
