//! Error response integration tests
//!
//! Status codes and JSON bodies produced by `CoachError` through actix-web.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use phrase_coach::CoachError;
    use phrase_coach::utils::error::ErrorBody;
    use serde_json::Value;

    async fn body_json(error: &CoachError) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Every request-facing error kind maps to its documented status
    #[test]
    fn test_status_taxonomy() {
        let cases = [
            (CoachError::MethodNotAllowed, 405),
            (CoachError::ConfigurationMissing, 500),
            (CoachError::malformed("bad boundary"), 400),
            (CoachError::MissingAudio, 400),
            (CoachError::MissingPhrase, 400),
            (CoachError::AudioTooLarge { limit: 10 }, 413),
            (CoachError::transcription_failed("boom", "whisper-1"), 500),
            (CoachError::analysis_failed("boom", ""), 500),
            (CoachError::analysis_parse_failed("nope"), 500),
        ];

        for (error, status) in cases {
            assert_eq!(
                error.error_response().status().as_u16(),
                status,
                "wrong status for {}",
                error.kind()
            );
        }
    }

    /// Only relevant optional fields are serialized
    #[actix_web::test]
    async fn test_optional_fields_are_omitted() {
        let body = body_json(&CoachError::MissingPhrase).await;
        assert_eq!(body, serde_json::json!({"error": "targetPhrase が空です。"}));

        let body = body_json(&CoachError::analysis_parse_failed("Sorry")).await;
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(body["raw"], "Sorry");
    }

    /// Analysis failures always carry `raw`, even when empty
    #[actix_web::test]
    async fn test_analysis_failed_keeps_empty_raw() {
        let body = body_json(&CoachError::analysis_failed("timeout", "")).await;
        let body: ErrorBody = serde_json::from_value(body).unwrap();
        assert_eq!(body.raw.as_deref(), Some(""));
        assert_eq!(body.detail.as_deref(), Some("timeout"));
        assert!(body.hint.is_none());
    }

    /// Startup configuration errors fall back to the generic internal message
    #[actix_web::test]
    async fn test_config_error_uses_internal_message() {
        let error = CoachError::config("Server config error: port cannot be 0");
        assert_eq!(error.error_response().status().as_u16(), 500);
        let body: ErrorBody = serde_json::from_value(body_json(&error).await).unwrap();
        assert_eq!(body.error, "サーバー内部でエラーが発生しました。");
        assert_eq!(
            body.detail.as_deref(),
            Some("Server config error: port cannot be 0")
        );
        assert!(body.hint.is_none());
    }
}
