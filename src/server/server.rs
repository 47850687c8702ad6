//! HTTP server core implementation

use crate::config::CoachConfig;
use crate::core::providers::openai::OpenAIClient;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{CoachError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Value of the `Server` header on every response
pub const SERVER_HEADER: &str = "phrase-coach";

/// HTTP server
pub struct HttpServer {
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a server backed by the OpenAI client.
    ///
    /// A missing credential is not an error here; coaching requests are refused
    /// until one is configured.
    pub fn new(config: CoachConfig) -> Result<Self> {
        info!("Creating HTTP server");

        let client = Arc::new(
            OpenAIClient::new(&config.openai)
                .map_err(|e| CoachError::config(format!("Failed to build provider client: {}", e)))?,
        );

        Ok(Self::with_state(AppState::new(config, client.clone(), client)))
    }

    /// Create a server around prepared state
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
            .configure(routes::configure_routes)
    }

    /// Bind, serve until Ctrl+C or SIGTERM, then drain in-flight requests
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.state.config.bind_address();
        let port = self.state.config.server.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .disable_signals()
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        let handle = server.handle();
        tokio::spawn(async move {
            Self::shutdown_signal().await;
            handle.stop(true).await;
        });

        info!("HTTP server listening on http://{}", bind_addr);

        server
            .await
            .map_err(|e| CoachError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
