//! E2E test for the coaching flow against OpenAI
//!
//! Requires OPENAI_API_KEY. Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use crate::common::{MultipartBody, coach_request};
    use crate::skip_without_env;
    use actix_web::{test, web};
    use phrase_coach::{CoachConfig, HttpServer};
    use serde_json::Value;

    /// Half a second of 16 kHz mono 16-bit silence
    fn silent_wav() -> Vec<u8> {
        let samples = 8000u32;
        let data_len = samples * 2;
        let mut wav = Vec::with_capacity(44 + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes());
        wav.extend_from_slice(&16_000u32.to_le_bytes());
        wav.extend_from_slice(&32_000u32.to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(44 + data_len as usize, 0);
        wav
    }

    /// Silence should come back as a (possibly empty) transcript plus analysis keys
    #[actix_web::test]
    #[ignore]
    async fn test_coach_silence_with_openai() {
        skip_without_env!("OPENAI_API_KEY");

        let mut config = CoachConfig::default();
        config.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        let server = HttpServer::new(config).unwrap();
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(server.state().clone())))
                .await;

        let body = MultipartBody::new()
            .file("audio", "silence.wav", "audio/wav", &silent_wav())
            .target_phrase("Rather have a bath");
        let response = test::call_service(&app, coach_request(body).to_request()).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = test::read_body_json(response).await;
        println!("{}", serde_json::to_string_pretty(&body).unwrap());
        assert!(body["transcript"].is_string());
        assert!(body.as_object().unwrap().len() > 1);
    }
}
