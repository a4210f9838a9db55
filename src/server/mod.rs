//! HTTP server for content assets and the JSON API

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path as UrlPath, Query, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::content::{ContentError, ContentItem, ContentKind, ContentRepository};
use crate::filter::{filter_by_tags, group_by_tags, parse_tag_list, toggle_tag};
use crate::gallery::{Gallery, GalleryImage, ImageFilter};
use crate::Folio;

/// Server state
pub struct ServerState {
    repo: ContentRepository,
    gallery_file: PathBuf,
    public_dir: PathBuf,
}

impl ServerState {
    pub fn new(repo: ContentRepository, gallery_file: PathBuf, public_dir: PathBuf) -> Self {
        Self {
            repo,
            gallery_file,
            public_dir,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TagQuery {
    tags: Option<String>,
    /// Flipped in or out of `tags` before filtering
    toggle: Option<String>,
}

impl TagQuery {
    fn selected(&self) -> Vec<String> {
        let mut selected = self.tags.as_deref().map(parse_tag_list).unwrap_or_default();
        if let Some(tag) = self.toggle.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            toggle_tag(&mut selected, tag);
        }
        selected
    }
}

#[derive(Debug, Default, Deserialize)]
struct GalleryQuery {
    tags: Option<String>,
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct GroupResponse {
    key: String,
    anchor: String,
    items: Vec<ContentItem>,
}

/// Start the server
pub async fn start(folio: &Folio, ip: &str, port: u16, open: bool) -> Result<()> {
    let state = Arc::new(ServerState::new(
        folio.repository(),
        folio.gallery_path(),
        folio.public_dir.clone(),
    ));
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router
pub fn router(state: Arc<ServerState>) -> Router {
    let public = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/content", get(empty_asset_path))
        .route("/content/", get(empty_asset_path))
        .route("/content/*path", get(serve_asset))
        .route("/api/content", get(empty_asset_path))
        .route("/api/content/", get(empty_asset_path))
        .route("/api/content/*path", get(serve_asset))
        .route("/api/gallery", get(gallery_handler))
        .route("/api/:kind", get(list_handler))
        .route("/api/:kind/tags", get(tags_handler))
        .route("/api/:kind/groups", get(groups_handler))
        .route("/api/:kind/:slug", get(item_handler))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, message.to_string()).into_response()
}

/// Run blocking repository work off the async executor
async fn blocking<T, F>(state: &Arc<ServerState>, f: F) -> std::result::Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce(&ServerState) -> T + Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            tracing::error!("Blocking task failed: {}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        })
}

fn parse_kind(raw: &str) -> std::result::Result<ContentKind, Response> {
    raw.parse::<ContentKind>()
        .map_err(|_| error(StatusCode::NOT_FOUND, "Not found"))
}

async fn empty_asset_path() -> Response {
    error(StatusCode::BAD_REQUEST, "Path is required")
}

/// Serve a file from the content root
async fn serve_asset(
    State(state): State<Arc<ServerState>>,
    UrlPath(path): UrlPath<String>,
    request: Request<Body>,
) -> Response {
    let relative = path.trim_start_matches('/');
    if relative.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Path is required");
    }
    if !is_safe_relative(&path) {
        tracing::warn!("Rejected asset path {:?}", path);
        return error(StatusCode::FORBIDDEN, "Access denied");
    }

    let content_dir = state.repo.content_dir();
    let file_path = content_dir.join(relative);
    if !file_path.exists() {
        return error(StatusCode::NOT_FOUND, "File not found");
    }
    if !stays_within(content_dir, &file_path) {
        tracing::warn!("Asset {:?} resolves outside the content root", path);
        return error(StatusCode::FORBIDDEN, "Access denied");
    }
    if !file_path.is_file() {
        return error(StatusCode::BAD_REQUEST, "Not a file");
    }

    let mut service = ServeFile::new(&file_path);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("Failed to serve {:?}: {}", file_path, e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

/// Only plain path segments, nothing absolute or climbing
fn is_safe_relative(path: &str) -> bool {
    !path.starts_with('/')
        && !path.contains('\\')
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Symlinks must not lead out of the served root
fn stays_within(root: &Path, path: &Path) -> bool {
    match (root.canonicalize(), path.canonicalize()) {
        (Ok(root), Ok(path)) => path.starts_with(root),
        _ => false,
    }
}

async fn list_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(kind): UrlPath<String>,
    Query(query): Query<TagQuery>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let selected = query.selected();

    let result = blocking(&state, move |state| {
        let items = state.repo.load_all(kind);
        filter_by_tags(&items, &selected)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(items) => Json(items).into_response(),
        Err(response) => response,
    }
}

async fn tags_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(kind): UrlPath<String>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match blocking(&state, move |state| state.repo.collect_tags(kind)).await {
        Ok(tags) => Json(tags).into_response(),
        Err(response) => response,
    }
}

async fn groups_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath(kind): UrlPath<String>,
    Query(query): Query<TagQuery>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let selected = query.selected();

    let result = blocking(&state, move |state| {
        let items = state.repo.load_all(kind);
        let filtered = filter_by_tags(&items, &selected);
        group_by_tags(&filtered, &selected)
            .into_iter()
            .map(|group| GroupResponse {
                key: group.key,
                anchor: group.anchor,
                items: group.items.into_iter().cloned().collect(),
            })
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(groups) => Json(groups).into_response(),
        Err(response) => response,
    }
}

async fn item_handler(
    State(state): State<Arc<ServerState>>,
    UrlPath((kind, slug)): UrlPath<(String, String)>,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    if !is_safe_relative(&slug) || slug.contains('/') {
        return error(StatusCode::FORBIDDEN, "Access denied");
    }

    let result = blocking(&state, move |state| match state.repo.try_load_item(kind, &slug) {
        Err(ContentError::MissingEntry(_)) => None,
        Ok(item) => Some(item),
        Err(e) => {
            tracing::error!("Failed to load {}/{}: {}", kind, slug, e);
            Some(ContentItem::placeholder(
                kind,
                &slug,
                state.repo.load_date(),
                e.to_string(),
            ))
        }
    })
    .await;

    match result {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => error(StatusCode::NOT_FOUND, "Not found"),
        Err(response) => response,
    }
}

async fn gallery_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<GalleryQuery>,
) -> Response {
    let filter = ImageFilter {
        tags: query.tags.as_deref().map(parse_tag_list).unwrap_or_default(),
        search_query: query.q.unwrap_or_default(),
    };

    let result = blocking(&state, move |state| {
        Gallery::load(&state.gallery_file).map(|gallery| {
            gallery
                .filter(&filter)
                .into_iter()
                .cloned()
                .collect::<Vec<GalleryImage>>()
        })
    })
    .await;

    match result {
        Ok(Ok(images)) => Json(images).into_response(),
        Ok(Err(e)) => {
            tracing::error!("{}", e);
            error(StatusCode::INTERNAL_SERVER_ERROR, "Gallery unavailable")
        }
        Err(response) => response,
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
