//! Dashboard updater
//!
//! Fetches the snapshot once and projects it onto the page:
//! 1. formatted counts into their text targets
//! 2. the report date, in long and `MM/DD/YYYY` form
//! 3. one icon per death since the previous report
//! 4. the overlay fade, scheduled after a fixed delay
//!
//! The whole snapshot is validated before the first write, so a bad payload
//! leaves the page exactly as it was.

use std::time::Duration;

use rand::Rng;

use crate::client::{StatsSource, fetch_snapshot};
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::format::{ReportDate, format_count};
use crate::icons::{Palette, generate_icons, icon_count};
use crate::page::{Document, TargetId};
use crate::scheduler::{Scheduler, Task};
use crate::types::{SnapshotView, StatsSnapshot};

/// What a successful render did
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub snapshot: StatsSnapshot,
    pub icons_drawn: usize,
    pub fade_delay: Duration,
}

/// Format every displayed field of a snapshot
pub fn project(snapshot: &StatsSnapshot) -> Result<SnapshotView> {
    let date = ReportDate::parse(&snapshot.date)?;
    Ok(SnapshotView {
        death_total: format_count(snapshot.death),
        total_cases: format_count(snapshot.positive),
        total_icu: format_count(snapshot.in_icu_currently),
        lives_lost: format_count(snapshot.death_increase),
        data_date: date.display(),
        short_date: date.short_display(),
        assembled_date: date.assembled().to_string(),
    })
}

pub struct DashboardUpdater {
    palette: Palette,
    max_icons: Option<usize>,
    overlay_delay: Duration,
}

impl DashboardUpdater {
    pub fn new(config: &Config) -> Result<Self> {
        let palette = Palette::new(config.icon_palette.clone())
            .ok_or_else(|| DashboardError::Config("ICON_PALETTE needs at least one color".into()))?;

        Ok(Self {
            palette,
            max_icons: config.max_icons,
            overlay_delay: Duration::from_millis(config.overlay_delay_ms),
        })
    }

    /// Fetch once and render. On any error nothing is written and no fade is
    /// scheduled, so the overlay stays up.
    pub async fn load_and_render<S, D, T, R>(
        &self,
        source: &S,
        doc: &mut D,
        scheduler: &mut T,
        rng: &mut R,
    ) -> Result<RenderOutcome>
    where
        S: StatsSource,
        D: Document,
        T: Scheduler,
        R: Rng,
    {
        let snapshot = fetch_snapshot(source).await?;
        self.render(snapshot, doc, scheduler, rng)
    }

    /// Render an already fetched snapshot
    pub fn render<D, T, R>(
        &self,
        snapshot: StatsSnapshot,
        doc: &mut D,
        scheduler: &mut T,
        rng: &mut R,
    ) -> Result<RenderOutcome>
    where
        D: Document,
        T: Scheduler,
        R: Rng,
    {
        let view = project(&snapshot)?;

        doc.set_text(TargetId::DeathTotal, &view.death_total);
        doc.set_text(TargetId::TotalDeath2, &view.death_total);
        doc.set_text(TargetId::TotalCases, &view.total_cases);
        doc.set_text(TargetId::TotalIcu, &view.total_icu);
        doc.set_text(TargetId::HighlightLivesLost, &view.lives_lost);

        doc.set_text(TargetId::DataDate, &view.data_date);
        doc.set_text(TargetId::AssembledDate, &view.assembled_date);

        let count = icon_count(snapshot.death_increase, self.max_icons);
        let icons_drawn = generate_icons(doc, count, &self.palette, rng);
        doc.set_text(TargetId::ImageText, &view.lives_lost);

        scheduler.schedule_once(self.overlay_delay, Task::FadeOverlay);

        Ok(RenderOutcome {
            snapshot,
            icons_drawn,
            fade_delay: self.overlay_delay,
        })
    }
}
