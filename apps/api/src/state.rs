use std::sync::Arc;

use crate::mcq::generator::McqGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Production: `GeminiClient`.
    /// None when GOOGLE_API_KEY was absent at startup; generation then fails
    /// with a 500 on every call while export keeps working, since it never
    /// touches the model.
    pub llm: Option<Arc<dyn McqGenerator>>,
}
