use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use shelf_site_core::MetadataStore;
use shelf_site_generator::components;
use shelf_site_generator::content::DirectorySource;
use shelf_site_generator::{GeneratedSite, INDEX_PATH, NOT_FOUND_PATH, generate_site};
use shelf_site_validator::{CONFIG_FILE, CONTENT_DIR, STATIC_DIR};
use std::path::{Component, Path, PathBuf};
use std::{fs, net::SocketAddr};
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::build::open_site;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// A response body with its content type
#[derive(Debug)]
struct Served {
    content_type: String,
    body: Vec<u8>,
}

/// Start preview server with hot reload for local development.
///
/// Every request regenerates the site from disk, so edits to site.toml or
/// content show up on the next load. A file watcher pushes reload events to
/// open pages over SSE.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("📚 Starting preview server...");
    println!("   Site: {}", path.display());

    let (store, _) = open_site(&path)?;
    let site = store.load().context("Failed to load site.toml")?;
    println!("   ✓ Loaded: {}", site.title);
    println!("   ✓ Menu entries: {}", site.menu_entries.len());

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let app = Router::new()
        .route("/_reload", get(sse_handler))
        .fallback(page_handler)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            eprintln!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                if event.paths.iter().any(|p| is_watched(p)) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Editor swap files and hidden files do not trigger a reload
fn is_watched(path: &Path) -> bool {
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    !filename.starts_with('.') && !filename.ends_with('~') && !filename.ends_with(".swp")
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let store = MetadataStore::new(state.site_path.join(CONFIG_FILE));
    let source = DirectorySource::new(state.site_path.join(CONTENT_DIR));

    let generated = match generate_site(&store, &source, true) {
        Ok(generated) => generated,
        Err(e) => {
            tracing::warn!(error = %e, "preview generation failed");
            return error_page(&e.to_string());
        }
    };

    let request_path = uri.path();
    if let Some(failure) = generated
        .failures
        .iter()
        .find(|f| request_path.trim_matches('/') == f.id)
    {
        return error_page(&format!("{}: {}", failure.id, failure.error));
    }

    let static_dir = state.site_path.join(STATIC_DIR);
    match lookup(&generated, &static_dir, request_path) {
        Some(served) => (
            [(header::CONTENT_TYPE, served.content_type)],
            served.body,
        )
            .into_response(),
        None => {
            let body = generated.page(NOT_FOUND_PATH).unwrap_or("Not found").to_string();
            (StatusCode::NOT_FOUND, Html(body)).into_response()
        }
    }
}

/// Map a request path onto a generated page, a generated asset or a file
/// under the static directory, in that order
fn lookup(generated: &GeneratedSite, static_dir: &Path, request_path: &str) -> Option<Served> {
    let relative = request_path.trim_start_matches('/');
    let html = |body: &str| Served {
        content_type: "text/html; charset=utf-8".to_string(),
        body: body.as_bytes().to_vec(),
    };

    if relative.is_empty() {
        return generated.page(INDEX_PATH).map(html);
    }
    if let Some(page) = generated.page(relative) {
        return Some(html(page));
    }
    let directory_page = format!("{}/{}", relative.trim_end_matches('/'), INDEX_PATH);
    if let Some(page) = generated.page(&directory_page) {
        return Some(html(page));
    }
    if let Some(data) = generated.asset(relative) {
        return Some(Served {
            content_type: mime_guess::from_path(relative)
                .first_or_octet_stream()
                .to_string(),
            body: data.to_vec(),
        });
    }

    let candidate = Path::new(relative);
    if !candidate
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    let file = static_dir.join(candidate);
    if !file.is_file() {
        return None;
    }
    let body = fs::read(&file).ok()?;
    Some(Served {
        content_type: mime_guess::from_path(&file)
            .first_or_octet_stream()
            .to_string(),
        body,
    })
}

fn error_page(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(components::error_html(message)),
    )
        .into_response()
}
