//! Liveness probe

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Body of `GET /healthz`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

/// Always `{"ok": true}` while the process is serving. Touches no provider.
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { ok: true })
}
