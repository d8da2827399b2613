pub mod config;
pub mod routes;
pub mod state;

use std::collections::BTreeSet;

use axum::extract::OriginalUri;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build the complete router: JSON API on `/api/*`, Leptos SSR for everything else.
pub fn build_router(state: AppState) -> Router {
    let api: Router = api_routes().with_state(state.clone());

    let routes = generate_route_list(site_web::app::App);
    let registered: BTreeSet<&str> = routes.iter().map(|route| route.path()).collect();
    let slash_paths: BTreeSet<String> = registered
        .iter()
        .filter(|path| !path.ends_with('/'))
        .map(|path| format!("{path}/"))
        .filter(|path| !registered.contains(path.as_str()))
        .collect();

    let mut leptos = Router::<AppState>::new().leptos_routes(&state, routes, {
        let leptos_options = state.leptos_options.clone();
        move || site_web::app::shell(leptos_options.clone())
    });
    // `/preview/` is the same page as `/preview`; send it to the registered path
    // instead of letting it reach the not-found handler.
    for path in slash_paths {
        leptos = leptos.route(&path, get(trim_trailing_slash));
    }
    let leptos: Router = leptos
        .fallback(file_and_error_handler::<AppState, _>(site_web::app::shell))
        .with_state(state);

    // API first, then Leptos SSR. Anything else is a static asset from the
    // site root or, failing that, the not-found page.
    Router::new()
        .nest("/api", api)
        .merge(leptos)
        .layer(TraceLayer::new_for_http())
}

async fn trim_trailing_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    let path = uri.path().trim_end_matches('/');
    let target = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    Redirect::permanent(&target)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/meta", routes::meta::router())
        .merge(routes::health::router())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    fn app() -> Router {
        build_router(AppState::new(ServerConfig::default()))
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_preview_meta_json() {
        let (status, body) = get("/api/meta/preview").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "title": "Overview of website and it's capabilities" },
                { "name": "preview", "content": "Welcome to the preview" }
            ])
        );
    }

    #[tokio::test]
    async fn test_preview_meta_ignores_query() {
        let (_, plain) = get("/api/meta/preview").await;
        let (status, noisy) = get("/api/meta/preview?id=42&x&id=7&path=..%2F..").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plain, noisy);
    }

    #[tokio::test]
    async fn test_preview_page() {
        let (status, body) = get("/preview").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>"));
        assert!(body.contains("Overview of website and it"));
        assert!(body.contains(r#"name="preview""#));
        assert!(body.contains(r#"content="Welcome to the preview""#));
        assert!(body.contains("Hello"));
        assert!(body.contains("<main"));
    }

    #[tokio::test]
    async fn test_preview_trailing_slash() {
        let response = app()
            .oneshot(Request::builder().uri("/preview/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/preview");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!String::from_utf8_lossy(&body).contains("Hello"));

        let (status, body) = get("/preview").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello"));
    }

    #[tokio::test]
    async fn test_preview_trailing_slash_keeps_query() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/preview/?ref=home")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/preview?ref=home");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get("/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }
}
