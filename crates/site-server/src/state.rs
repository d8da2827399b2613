use std::sync::Arc;

use leptos::prelude::LeptosOptions;

use crate::config::ServerConfig;

/// Combined state: server config + Leptos options.
/// Leptos extracts `LeptosOptions` through the manual `FromRef` impl.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let leptos_options = config.leptos_options();
        Self {
            config: Arc::new(config),
            leptos_options,
        }
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
