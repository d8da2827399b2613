use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query},
    routing::get,
    Json, Router,
};
use site_web::meta::{MetaArgs, MetaEntry};
use site_web::pages::preview;
use tracing::debug;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/preview", get(preview_meta))
}

/// Head entries of the preview page as JSON. The query string is passed
/// through as route arguments and has no effect on the result.
async fn preview_meta(
    OriginalUri(uri): OriginalUri,
    params: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> Json<Vec<MetaEntry>> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let args = MetaArgs::from_query(uri.path(), params);
    debug!(path = %args.path, params = args.params.len(), "preview meta requested");
    Json(preview::meta(&args))
}
