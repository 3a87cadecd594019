//! Overlay fade-out
//!
//! Opaque -> Fading -> Hidden. Each tick of the interval timer takes one
//! step off the opacity; the tick that reaches zero cancels the timer.
//!
//! Opacity is kept as a count of remaining steps so ten steps of 0.1 land
//! on exactly zero.

use std::time::Duration;

/// Where the overlay is in its fade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Not started; opacity unset (renders as 1)
    Opaque,
    Fading,
    /// Opacity 0, timer cancelled. Terminal.
    Hidden,
}

/// What the interval timer should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Cancel,
}

/// Opacity after one tick, relative to when the fade started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub at: Duration,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct OverlayFader {
    steps: u8,
    remaining: Option<u8>,
    phase: FadePhase,
}

impl OverlayFader {
    /// Fader that goes from 1 to 0 in `steps` ticks (at least one)
    pub fn new(steps: u8) -> Self {
        Self {
            steps: steps.max(1),
            remaining: None,
            phase: FadePhase::Opaque,
        }
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Current opacity; `None` until the first tick sets it
    pub fn opacity(&self) -> Option<f64> {
        self.remaining
            .map(|r| f64::from(r) / f64::from(self.steps))
    }

    /// Opacity as the page sees it (unset counts as fully opaque)
    pub fn effective_opacity(&self) -> f64 {
        self.opacity().unwrap_or(1.0)
    }

    /// One interval tick
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == FadePhase::Hidden {
            return TickOutcome::Cancel;
        }

        let remaining = self.remaining.unwrap_or(self.steps).saturating_sub(1);
        self.remaining = Some(remaining);

        if remaining == 0 {
            self.phase = FadePhase::Hidden;
            TickOutcome::Cancel
        } else {
            self.phase = FadePhase::Fading;
            TickOutcome::Continue
        }
    }

    /// Drive the fade to completion on a fixed interval, recording each tick
    pub fn run(&mut self, interval: Duration) -> Vec<FadeFrame> {
        let mut frames = Vec::with_capacity(usize::from(self.steps));
        let mut at = Duration::ZERO;

        while self.phase != FadePhase::Hidden {
            at += interval;
            let outcome = self.tick();
            frames.push(FadeFrame {
                at,
                opacity: self.effective_opacity(),
            });
            if outcome == TickOutcome::Cancel {
                break;
            }
        }
        frames
    }
}

/// CSS for a step animation reproducing the fade timeline.
///
/// The animation stays at opacity 1 for `delay`, then jumps to each frame's
/// opacity at that frame's time and holds the last one.
pub fn fade_animation_css(selector: &str, delay: Duration, frames: &[FadeFrame]) -> String {
    let total = frames.last().map_or(Duration::ZERO, |f| f.at);
    let total_ms = total.as_millis().max(1);

    let mut keyframes = String::from("@keyframes overlay-fade {\n    0% { opacity: 1; }\n");
    for frame in frames {
        let percent = frame.at.as_millis() as f64 * 100.0 / total_ms as f64;
        keyframes.push_str(&format!(
            "    {}% {{ opacity: {}; }}\n",
            trim_decimal(percent),
            trim_decimal(frame.opacity)
        ));
    }
    keyframes.push_str("}\n");

    format!(
        "{keyframes}{selector} {{ animation: overlay-fade {}ms step-end {}ms 1 forwards; }}\n",
        total.as_millis(),
        delay.as_millis()
    )
}

fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
