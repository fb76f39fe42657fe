pub mod cards;
pub mod context;
pub mod layout;
pub mod overlay;
pub mod pack_order;
pub mod rating;

// Re-exports for convenience
pub use cards::{Card, ManaColor, Rarity};
pub use context::{AppConfig, AppConfigExt, GridCalibration, InGameOverlaySettings};
pub use layout::{MAX_PACK_SIZE, WindowRect, card_positions};
pub use overlay::{
    BadgeHost, BadgeStyle, BadgeSurface, OverlaySynchronizer, SyncCommand, SyncHandle, SyncState,
    WindowQuery, WindowTracker, tier_style,
};
pub use pack_order::{pack_sort_key, sort_pack, sorted_pack};
pub use rating::{
    ArtifactError, ArtifactStore, ContextKey, DraftMode, InferenceSession, RatingEngine, RatingMap,
};
