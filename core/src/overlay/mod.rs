//! In-game rating badge overlay
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 service                      │
//! │   SyncCommand channel + 500 ms poll task     │
//! ├──────────────────────────────────────────────┤
//! │              synchronizer                    │
//! │  sort → locate window → layout → badge pool  │
//! ├──────────────────────────────────────────────┤
//! │            window / badge seams              │
//! │   WindowTracker, BadgeHost, BadgeSurface     │
//! │        (implemented by the host app)         │
//! └──────────────────────────────────────────────┘
//! ```

mod badge;
mod service;
mod synchronizer;
mod window;


pub use badge::{BadgeHost, BadgeStyle, BadgeSurface, tier_style};
pub use service::{POLL_INTERVAL, SyncCommand, SyncHandle, spawn};
pub use synchronizer::{OverlaySynchronizer, SyncState};
pub use window::{WindowQuery, WindowTracker};
