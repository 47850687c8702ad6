//! Pronunciation coaching endpoint

use crate::core::coach::{AudioUpload, CoachForm, CoachResult};
use crate::server::state::AppState;
use crate::utils::error::{CoachError, Result};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{debug, error, info, warn};

/// Form field carrying the recording
pub const AUDIO_FIELD: &str = "audio";
/// Form field carrying the phrase the user tried to say
pub const TARGET_PHRASE_FIELD: &str = "targetPhrase";

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// `POST /api/coach`
///
/// Accepts multipart/form-data with an `audio` file and a `targetPhrase` text
/// field. Responds with the transcript merged into the analysis JSON.
pub async fn coach(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse> {
    match handle(&state, payload).await {
        Ok(result) => {
            info!(keys = result.len(), "Coaching request completed");
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!(kind = e.kind(), error = %e, "Coaching request rejected");
            } else {
                error!(kind = e.kind(), error = %e, "Coaching request failed");
            }
            Err(e)
        }
    }
}

/// Any method other than POST on the coaching path
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "Method not allowed");
    CoachError::MethodNotAllowed.error_response()
}

async fn handle(state: &AppState, payload: Multipart) -> Result<CoachResult> {
    // Checked before the body is read so an unconfigured service never stages anything.
    if !state.coach.is_configured() {
        return Err(CoachError::ConfigurationMissing);
    }

    let request = read_form(payload, state.upload_limit()).await?.into_request()?;
    state.coach.coach(request).await
}

/// Collect the known fields of the multipart body, skipping everything else
async fn read_form(mut payload: Multipart, upload_limit: usize) -> Result<CoachForm> {
    let mut form = CoachForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| CoachError::malformed(e.to_string()))?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => {
                skip_field(&mut field).await?;
                continue;
            }
        };

        match field_name.as_str() {
            // An empty earlier part does not shadow a later one with content
            AUDIO_FIELD if form.audio.as_ref().is_none_or(|audio| audio.bytes.is_empty()) => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_string);
                let bytes = read_field(&mut field, upload_limit)
                    .await
                    .map_err(|e| match e {
                        FieldError::TooLarge => CoachError::AudioTooLarge {
                            limit: upload_limit,
                        },
                        FieldError::Stream(message) => CoachError::malformed(message),
                    })?;
                debug!(filename = ?filename, bytes = bytes.len(), "Received audio part");
                form.audio = Some(AudioUpload {
                    filename,
                    bytes: bytes.freeze(),
                });
            }
            TARGET_PHRASE_FIELD => {
                let bytes = read_field(&mut field, MAX_TEXT_FIELD_BYTES)
                    .await
                    .map_err(|e| match e {
                        FieldError::TooLarge => {
                            CoachError::malformed("targetPhrase field is too large")
                        }
                        FieldError::Stream(message) => CoachError::malformed(message),
                    })?;
                form.target_phrase = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            _ => skip_field(&mut field).await?,
        }
    }

    Ok(form)
}

enum FieldError {
    TooLarge,
    Stream(String),
}

async fn read_field(field: &mut Field, limit: usize) -> std::result::Result<BytesMut, FieldError> {
    let mut data = BytesMut::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| FieldError::Stream(e.to_string()))?;
        if data.len() + chunk.len() > limit {
            return Err(FieldError::TooLarge);
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

async fn skip_field(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| CoachError::malformed(e.to_string()))?;
    }
    Ok(())
}
