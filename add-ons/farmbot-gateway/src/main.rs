//! Axum-based API gateway for the farmer chatbot. Config-driven via CoreConfig.

mod error;
mod handlers;
mod storage;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use farmbot_core::{Category, CoreConfig, ResponseMatcher};
use std::path::Path as StdPath;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ApiError;
use crate::handlers::iso_timestamp;
use crate::storage::UploadStore;

/// Room for multipart boundaries and part headers on top of the file limit.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes advertised by `GET /` and printed at startup.
const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /", "API information"),
    ("POST /api/chat", "Text input chat"),
    ("POST /api/upload-image", "Image upload and analysis"),
    ("POST /api/upload-voice", "Voice upload and processing"),
    ("GET /api/sample-data", "Get sample questions and responses"),
    ("GET /api/health", "Health check"),
];

/// Pre-flight check: config loads, knowledge base validates, upload dir is writable, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking knowledge base... ");
    let matcher =
        ResponseMatcher::farming().map_err(|e| format!("knowledge base invalid: {}", e))?;
    let kb = matcher.knowledge();
    println!(
        "OK ({} text, {} image, {} voice entries; {} voice keywords)",
        kb.section(Category::Text).len(),
        kb.section(Category::Image).len(),
        kb.section(Category::Voice).len(),
        kb.voice_keywords().len()
    );

    let upload_dir = StdPath::new(&config.upload_dir);
    print!("Checking upload dir {}... ", upload_dir.display());
    std::fs::create_dir_all(upload_dir)
        .map_err(|e| format!("upload dir {} not creatable: {}", upload_dir.display(), e))?;
    let probe = upload_dir.join(".verify_probe");
    std::fs::write(&probe, b"probe")
        .map_err(|e| format!("upload dir {} not writable: {}", upload_dir.display(), e))?;
    let _ = std::fs::remove_file(&probe);
    println!("OK");

    let port = config.port;
    print!("Checking {}:{}... ", config.host, port);
    match std::net::TcpListener::bind((config.host.as_str(), port)) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\n✅ SUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[farmbot-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().context("load CoreConfig")?);
    let matcher = Arc::new(ResponseMatcher::farming().context("build knowledge base")?);
    let uploads = Arc::new(
        UploadStore::open(&config.upload_dir)
            .await
            .with_context(|| format!("open upload dir {}", config.upload_dir))?,
    );

    let app = build_app(AppState {
        config: Arc::clone(&config),
        matcher: Arc::clone(&matcher),
        uploads: Arc::clone(&uploads),
        started_at: Instant::now(),
    });

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;
    log_startup(&config, &matcher, addr);
    tracing::info!("📁 Uploads stored in {}", uploads.dir().display());

    axum::serve(listener, app).await?;
    Ok(())
}

fn log_startup(config: &CoreConfig, matcher: &ResponseMatcher, addr: std::net::SocketAddr) {
    tracing::info!("🌾 {} started", config.app_name);
    tracing::info!("📡 Listening on http://{}", addr);
    for (route, description) in ENDPOINTS {
        tracing::info!("   {:<24} {}", route, description);
    }
    tracing::info!("📝 Sample text questions:");
    for (i, question) in matcher
        .knowledge()
        .section(Category::Text)
        .keys()
        .enumerate()
    {
        tracing::info!("   {}. {}", i + 1, question);
    }
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin; cross-origin requests disabled");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn build_app(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let cors = cors_layer(&state.config.cors_origin);

    Router::new()
        .route("/", get(root))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/upload-image", post(handlers::upload::upload_image))
        .route("/api/upload-voice", post(handlers::upload::upload_voice))
        .route("/api/sample-data", get(sample_data))
        .route("/api/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) matcher: Arc<ResponseMatcher>,
    pub(crate) uploads: Arc<UploadStore>,
    pub(crate) started_at: Instant,
}

/// GET / – API identity and route list.
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    let endpoints: serde_json::Map<String, serde_json::Value> = ENDPOINTS
        .iter()
        .map(|(route, description)| (route.to_string(), serde_json::json!(description)))
        .collect();
    Json(serde_json::json!({
        "message": state.config.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
        "status": "Server is running successfully! 🌾",
    }))
}

/// GET /api/sample-data – every key per category, for client-side suggestions.
async fn sample_data(State(state): State<AppState>) -> Json<serde_json::Value> {
    let kb = state.matcher.knowledge();
    Json(serde_json::json!({
        "textSamples": kb.sample_keys(Category::Text),
        "imageSamples": kb.sample_keys(Category::Image),
        "voiceSamples": kb.sample_keys(Category::Voice),
        "success": true,
    }))
}

/// GET /api/health – liveness check for UI and scripts.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Server is healthy",
        "timestamp": iso_timestamp(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
