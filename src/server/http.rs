use std::{
  path::{Component, Path, PathBuf},
  sync::Arc,
};

use axum::{
  extract::{self, State},
  http::{header, StatusCode, Uri},
  response::{IntoResponse, Response},
  routing::get,
  Router,
};
use include_dir::{include_dir, Dir};
use metrics::increment_counter;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;
use tracing::debug;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX: &str = "index.html";

#[derive(Clone)]
pub struct AppState {
  pkg_dir: Arc<PathBuf>,
  metrics: PrometheusHandle,
}

impl AppState {
  pub fn new(pkg_dir: PathBuf, metrics: PrometheusHandle) -> Self {
    AppState {
      pkg_dir: Arc::new(pkg_dir),
      metrics,
    }
  }
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/metrics", get(render_metrics))
    .route("/pkg/*path", get(pkg_file))
    .fallback(static_file)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn index() -> Response {
  embedded(INDEX).unwrap_or_else(not_found)
}

async fn render_metrics(State(state): State<AppState>) -> String {
  state.metrics.render()
}

async fn pkg_file(
  State(state): State<AppState>,
  extract::Path(path): extract::Path<String>,
) -> Response {
  let Some(relative) = confined(path.trim_start_matches('/')) else {
    debug!(%path, "Rejected bundle path");
    return not_found();
  };
  let file = state.pkg_dir.join(relative);
  match tokio::fs::read(&file).await {
    Ok(bytes) => {
      increment_counter!("assets_served", "source" => "pkg");
      with_content_type(&file, bytes)
    }
    Err(err) => {
      debug!(file = %file.display(), %err, "Bundle file not readable");
      not_found()
    }
  }
}

/// Embedded assets, with extension-less paths handed to the client router.
async fn static_file(uri: Uri) -> Response {
  let path = uri.path().trim_start_matches('/');
  if let Some(response) = embedded(path) {
    return response;
  }
  if Path::new(path).extension().is_some() {
    return not_found();
  }
  index().await
}

fn embedded(path: &str) -> Option<Response> {
  let file = STATIC_DIR.get_file(path)?;
  increment_counter!("assets_served", "source" => "embedded");
  Some(with_content_type(Path::new(path), file.contents()))
}

fn with_content_type(path: &Path, body: impl IntoResponse) -> Response {
  let mime = mime_guess::from_path(path).first_or_octet_stream();
  ([(header::CONTENT_TYPE, mime.to_string())], body).into_response()
}

fn not_found() -> Response {
  increment_counter!("assets_missing");
  StatusCode::NOT_FOUND.into_response()
}

/// Relative path made only of normal components, so joining it onto a
/// directory can never leave that directory.
fn confined(path: &str) -> Option<PathBuf> {
  let mut relative = PathBuf::new();
  for component in Path::new(path).components() {
    match component {
      Component::Normal(part) => relative.push(part),
      _ => return None,
    }
  }
  (!relative.as_os_str().is_empty()).then_some(relative)
}
