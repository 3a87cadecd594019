//! COVID Dashboard Worker - daily US COVID-19 page on Cloudflare Workers
//!
//! Fetches the latest national snapshot and serves it as a single HTML page.
//!
//! # Architecture
//! - Main entry point handles HTTP requests
//! - One upstream fetch per page load, nothing cached or stored
//! - Updater writes through a page model; the dashboard module turns that
//!   model into HTML
//!
//! # Features
//! - Locale-grouped death, case and ICU counts
//! - One person icon per death since the previous report
//! - Loading overlay that fades out after the data is in
//! - Fixed info box hidden once the reader scrolls past the content

// Clippy configuration
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns

mod client;
mod config;
mod dashboard;
mod error;
mod fader;
mod format;
mod icons;
mod page;
mod scheduler;
mod scroll;
mod types;
mod updater;

use worker::{Context, Env, Request, Response, Router, console_debug, console_error, console_log, console_warn, event};

pub use client::{RawResponse, StatsClient, StatsSource, fetch_snapshot, parse_payload};
pub use config::{Config, DEFAULT_STATS_URL};
pub use error::DashboardError;
pub use fader::{FadeFrame, FadePhase, OverlayFader, TickOutcome, fade_animation_css};
pub use format::{ReportDate, format_count};
pub use icons::{PERSON_GLYPH, Palette, generate_icons, icon_count};
pub use page::{Document, Element, PageDocument, TargetId};
pub use scheduler::{Scheduled, Scheduler, Task, Timeline};
pub use scroll::{Visibility, text_box_visibility};
pub use types::*;
pub use updater::{DashboardUpdater, RenderOutcome, project};

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let router = Router::new();

    router
        // Health check
        .get_async("/health", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&HealthResponse {
                status: "healthy".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                environment: config.environment,
                timestamp: chrono::Utc::now().to_rfc3339(),
            })
        })
        // Dashboard UI
        .get_async("/", |_req, ctx| async move { render_dashboard(&ctx.env).await })
        .get_async("/dashboard", |_req, ctx| async move {
            render_dashboard(&ctx.env).await
        })
        // Current snapshot with its formatted view (raw data)
        .get_async("/api/snapshot", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            match load_snapshot(&config).await {
                Ok(result) => Response::from_json(&result),
                Err(e) => {
                    console_warn!("Snapshot request failed: {}", e);
                    Ok(Response::from_json(&serde_json::json!({
                        "error": true,
                        "message": format!("{e}")
                    }))?
                    .with_status(e.status_code()))
                }
            }
        })
        // Fallback
        .run(req, env)
        .await
}

/// Fetch, render and serve the dashboard page.
///
/// A failed fetch still serves the page, unrendered and with the overlay up,
/// but as a 502 so the failure is visible.
async fn render_dashboard(env: &Env) -> WResult<Response> {
    let config = match Config::from_env(env) {
        Ok(c) => c,
        Err(e) => return Response::error(format!("Config error: {e}"), 500),
    };
    let updater = DashboardUpdater::new(&config)?;
    let client = StatsClient::new(config.stats_url.clone());

    if config.log_level == "debug" {
        console_debug!("Fetching stats from {}", client.url());
    }

    let mut doc = PageDocument::new();
    let mut timeline = Timeline::new();
    let mut rng = rand::thread_rng();

    let status = match updater
        .load_and_render(&client, &mut doc, &mut timeline, &mut rng)
        .await
    {
        Ok(outcome) => {
            console_log!("Stats endpoint responded HTTP 200");
            console_log!(
                "Rendered report {}: {} icons, overlay fade in {}ms",
                outcome.snapshot.date,
                outcome.icons_drawn,
                outcome.fade_delay.as_millis()
            );
            200
        }
        Err(e) => {
            if let Some(upstream) = e.upstream_status() {
                console_log!("Stats endpoint responded HTTP {}", upstream);
            }
            console_error!("Dashboard render failed: {}", e);
            e.status_code()
        }
    };

    let html = dashboard::dashboard_html(&doc, &timeline, &config);
    Ok(Response::from_html(html)?.with_status(status))
}

/// Fetch the snapshot and pair it with its formatted view
async fn load_snapshot(config: &Config) -> std::result::Result<SnapshotResponse, DashboardError> {
    let client = StatsClient::new(config.stats_url.clone());
    let snapshot = fetch_snapshot(&client).await?;
    let view = project(&snapshot)?;

    Ok(SnapshotResponse {
        snapshot,
        view,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    })
}
