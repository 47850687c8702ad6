//! HTTP server lifecycle helpers

use crate::server::server::HttpServer;
use crate::utils::error::CoachError;
use std::io::ErrorKind;
use tracing::{info, warn};

impl HttpServer {
    /// Resolves on Ctrl+C or, on unix, SIGTERM
    pub async fn shutdown_signal() {
        let ctrl_c = async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C signal, shutting down gracefully"),
                Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                    info!("Received terminate signal, shutting down gracefully");
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }

    /// Operator-facing message for a failed bind
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> CoachError {
        let error_str = error.to_string();

        if error.kind() == ErrorKind::AddrInUse
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            let next_port = port.saturating_add(1);
            CoachError::server(format!(
                "ポート {port} は既に使用中です。\n\
                 対処1: 別ポートで起動 → PORT={next_port} phrase-coach (または --port {next_port})\n\
                 対処2: {port} 番を使っているプロセスを終了 → lsof -i:{port}"
            ))
        } else if error.kind() == ErrorKind::PermissionDenied || error_str.contains("os error 13") {
            CoachError::server(format!(
                "ポート {port} にバインドする権限がありません。\n\
                 対処: 1024 以上のポートを使う → PORT=3000 phrase-coach"
            ))
        } else {
            CoachError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
