//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use phrase_coach::utils::error::ErrorBody;
use std::path::Path;

/// Assert the status and decode the standard error body
pub async fn assert_error_body<B: MessageBody>(
    response: ServiceResponse<B>,
    status: u16,
    message: &str,
) -> ErrorBody {
    assert_eq!(response.status().as_u16(), status);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );

    let body: ErrorBody = test::read_body_json(response).await;
    assert_eq!(body.error, message);
    body
}

/// Assert nothing is left behind in the staging directory
pub fn assert_no_staged_files(dir: &Path) {
    let leftovers: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    assert!(leftovers.is_empty(), "staged files left behind: {:?}", leftovers);
}
