//! Poll task driving the synchronizer
//!
//! The synchronizer is owned by one spawned tokio task; producers talk to it
//! through a command channel and a fixed-period interval keeps badges glued
//! to the window between explicit updates. Shutdown (command or channel
//! close) tears the synchronizer down exactly once.

use std::time::Duration;

use picklens_types::InGameOverlaySettings;
use tokio::sync::mpsc::{self, Sender};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::cards::Card;
use crate::rating::RatingMap;

use super::badge::BadgeHost;
use super::synchronizer::OverlaySynchronizer;
use super::window::WindowTracker;

/// Cadence between window re-checks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Commands accepted by the poll task.
pub enum SyncCommand {
    /// Latest pack/ratings/pick; triggers an immediate reposition
    Update {
        pack: Vec<Card>,
        ratings: RatingMap,
        pick_number: u32,
    },
    /// Replace overlay settings (enable/disable, calibration, debug labels)
    ApplySettings(InGameOverlaySettings),
    /// Hide everything and forget the cached pack/ratings
    Clear,
    Shutdown,
}

/// Handle to a running poll task.
pub struct SyncHandle {
    tx: Sender<SyncCommand>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Clone of the command sender for producer pipelines.
    pub fn sender(&self) -> Sender<SyncCommand> {
        self.tx.clone()
    }

    pub async fn update(&self, pack: Vec<Card>, ratings: RatingMap, pick_number: u32) {
        let _ = self
            .tx
            .send(SyncCommand::Update {
                pack,
                ratings,
                pick_number,
            })
            .await;
    }

    pub async fn apply_settings(&self, settings: InGameOverlaySettings) {
        let _ = self.tx.send(SyncCommand::ApplySettings(settings)).await;
    }

    pub async fn clear(&self) {
        let _ = self.tx.send(SyncCommand::Clear).await;
    }

    /// Stop the cadence and release all slot resources.
    pub async fn shutdown(self) {
        let _ = self.tx.send(SyncCommand::Shutdown).await;
        let _ = self.task.await;
    }
}

/// Spawn the poll task owning `sync`.
pub fn spawn<W, H>(mut sync: OverlaySynchronizer<W, H>) -> SyncHandle
where
    W: WindowTracker + Send + 'static,
    H: BadgeHost + Send + 'static,
    H::Badge: Send,
{
    let (tx, mut rx) = mpsc::channel::<SyncCommand>(32);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => sync.tick(),
                cmd = rx.recv() => match cmd {
                    Some(SyncCommand::Update { pack, ratings, pick_number }) => {
                        sync.update(pack, ratings, pick_number);
                    }
                    Some(SyncCommand::ApplySettings(settings)) => sync.apply_settings(settings),
                    Some(SyncCommand::Clear) => sync.clear(),
                    Some(SyncCommand::Shutdown) | None => break,
                },
            }
        }

        sync.teardown();
    });

    SyncHandle { tx, task }
}
