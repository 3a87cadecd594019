//! Dashboard module - COVID-19 daily page
//!
//! Assembles the rendered page model into a single HTML document.
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure with `{{id}}` markers
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: Scroll listener for the fixed text box
//!
//! The overlay fade is not scripted: if the render scheduled it, the fader's
//! tick sequence is emitted as a step animation delayed by the same amount.

mod css;
mod html;
mod js;

use std::time::Duration;

use crate::config::Config;
use crate::fader::{OverlayFader, fade_animation_css};
use crate::page::{PageDocument, TargetId};
use crate::scheduler::{Task, Timeline};

/// Generate the complete dashboard HTML page
pub fn dashboard_html(doc: &PageDocument, timeline: &Timeline, config: &Config) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>COVID-19 Daily Dashboard</title>
    <style>
{css}
{fade}
    </style>
</head>
<body>
{html}
    <script>
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        fade = overlay_fade_css(timeline, config),
        html = doc.fill(html::TEMPLATE),
        js = js::script()
    )
}

/// Fade animation for the overlay, or nothing if no fade was scheduled
fn overlay_fade_css(timeline: &Timeline, config: &Config) -> String {
    let Some(delay) = timeline.due_at(Task::FadeOverlay) else {
        return String::new();
    };

    let frames = OverlayFader::new(config.fade_steps).run(Duration::from_millis(config.fade_interval_ms));
    let selector = format!("#{}", TargetId::Overlay.as_str());
    fade_animation_css(&selector, delay, &frames)
}
