//! Overlay synchronizer
//!
//! Reconciles the cached pack/ratings against the live game window: sorts
//! the pack into the client's presentation order, derives badge positions
//! from the current window rectangle, and drives the badge-slot pool. Every
//! failure along the way (disabled, nothing cached, window gone, minimized,
//! rect unreadable, layout mismatch) converges on hiding the slots while
//! keeping them and the cached state alive for the next attempt.

use picklens_types::InGameOverlaySettings;
use tracing::{debug, error, warn};

use crate::cards::Card;
use crate::layout::{WindowRect, card_positions};
use crate::pack_order::sorted_pack;
use crate::rating::RatingMap;

use super::badge::{BadgeHost, BadgeSurface, tier_style};
use super::window::{WindowQuery, WindowTracker};

/// Badge label, optionally with the debug suffix used for calibration.
fn badge_label(rating: f32, debug: Option<(usize, &str)>) -> String {
    match debug {
        Some((idx, name)) => {
            let short: String = name.chars().take(10).collect();
            format!("{rating:.1} [{idx}:{short}]")
        }
        None => format!("{rating:.1}"),
    }
}

/// Coarse synchronizer state, mainly for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No pack/ratings cached
    Idle,
    /// Pack and ratings cached but badges currently hidden
    Locating,
    /// Badges shown at last-known-good positions
    Positioned,
}

pub struct OverlaySynchronizer<W: WindowTracker, H: BadgeHost> {
    tracker: W,
    host: H,
    query: WindowQuery,
    settings: InGameOverlaySettings,
    badges: Vec<H::Badge>,
    pack: Vec<Card>,
    ratings: RatingMap,
    pick_number: u32,
    last_rect: Option<WindowRect>,
    positioned: bool,
}

impl<W: WindowTracker, H: BadgeHost> OverlaySynchronizer<W, H> {
    pub fn new(tracker: W, host: H, settings: InGameOverlaySettings) -> Self {
        Self::with_query(tracker, host, settings, WindowQuery::default())
    }

    pub fn with_query(
        tracker: W,
        host: H,
        settings: InGameOverlaySettings,
        query: WindowQuery,
    ) -> Self {
        Self {
            tracker,
            host,
            query,
            settings,
            badges: Vec::new(),
            pack: Vec::new(),
            ratings: RatingMap::new(),
            pick_number: 0,
            last_rect: None,
            positioned: false,
        }
    }

    pub fn state(&self) -> SyncState {
        if self.pack.is_empty() || self.ratings.is_empty() {
            SyncState::Idle
        } else if self.positioned {
            SyncState::Positioned
        } else {
            SyncState::Locating
        }
    }

    /// Number of allocated badge slots (grows monotonically, never shrinks).
    pub fn slot_count(&self) -> usize {
        self.badges.len()
    }

    /// Number of slots currently shown.
    pub fn visible_badges(&self) -> usize {
        self.badges.iter().filter(|b| b.is_visible()).count()
    }

    /// Window rectangle from the last successful read, kept for diagnostics.
    pub fn last_rect(&self) -> Option<WindowRect> {
        self.last_rect
    }

    /// Replace the overlay settings and reconcile immediately.
    ///
    /// Disabling hides the badges without touching the cached pack/ratings,
    /// so re-enabling restores the previous positions without recomputation.
    pub fn apply_settings(&mut self, settings: InGameOverlaySettings) {
        self.settings = settings;
        self.reposition();
    }

    /// Store the latest pack/ratings/pick and reposition immediately.
    pub fn update(&mut self, pack: Vec<Card>, ratings: RatingMap, pick_number: u32) {
        debug!(
            cards = pack.len(),
            ratings = ratings.len(),
            pick = pick_number,
            "Overlay update"
        );
        self.pack = pack;
        self.ratings = ratings;
        self.pick_number = pick_number;
        self.reposition();
    }

    /// Cadence tick: re-run positioning against the live window.
    pub fn tick(&mut self) {
        self.reposition();
    }

    /// Hide everything and clear the cached pack/ratings (leaving the draft
    /// context). Slot surfaces are retained.
    pub fn clear(&mut self) {
        self.pack.clear();
        self.ratings.clear();
        self.pick_number = 0;
        self.hide_badges();
        self.positioned = false;
    }

    /// Release all slot surfaces. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.badges.clear();
        self.positioned = false;
    }

    fn hide_badges(&mut self) {
        for badge in &mut self.badges {
            badge.hide();
        }
        self.positioned = false;
    }

    fn reposition(&mut self) {
        if !self.settings.enabled || self.pack.is_empty() || self.ratings.is_empty() {
            self.hide_badges();
            return;
        }

        let Some(handle) = self.tracker.find(&self.query) else {
            debug!("Game window not found, hiding badges");
            self.hide_badges();
            return;
        };
        if self.tracker.is_minimized(&handle) {
            self.hide_badges();
            return;
        }
        let Some(rect) = self.tracker.client_rect(&handle) else {
            self.hide_badges();
            return;
        };
        self.last_rect = Some(rect);

        let pack = sorted_pack(&self.pack);
        let positions = card_positions(pack.len(), rect, &self.settings.grid);
        if positions.len() != pack.len() {
            warn!(
                cards = pack.len(),
                positions = positions.len(),
                "Layout mismatch, hiding badges"
            );
            self.hide_badges();
            return;
        }

        // Grow the slot pool to the pack size; surfaces are reused across
        // picks and only ever hidden, not destroyed
        while self.badges.len() < pack.len() {
            match self.host.create_badge() {
                Ok(badge) => self.badges.push(badge),
                Err(e) => {
                    error!(error = %e, "Failed to create badge surface");
                    self.hide_badges();
                    return;
                }
            }
        }

        let card_ratings: Vec<(&str, f32)> = pack
            .iter()
            .map(|card| {
                let rating = self.ratings.get(&card.name).copied().unwrap_or(0.0);
                (card.name.as_str(), rating)
            })
            .collect();

        // Best-in-pack: maximum rating, first occurrence in sort order wins
        // ties, and a zero rating is never eligible
        let mut best_index: Option<usize> = None;
        let mut best_rating = 0.0f32;
        for (idx, &(_, rating)) in card_ratings.iter().enumerate() {
            if rating > 0.0 && rating > best_rating {
                best_rating = rating;
                best_index = Some(idx);
            }
        }

        for (idx, (&(x, y), &(name, rating))) in
            positions.iter().zip(card_ratings.iter()).enumerate()
        {
            let is_best = best_index == Some(idx);
            let label = if self.settings.debug_labels {
                badge_label(rating, Some((idx, name)))
            } else {
                badge_label(rating, None)
            };
            self.badges[idx].show(x, y, &label, tier_style(rating, is_best));
        }
        for badge in self.badges.iter_mut().skip(pack.len()) {
            badge.hide();
        }
        self.positioned = true;
    }
}
