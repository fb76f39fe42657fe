//! Artifact store seam and on-disk layout
//!
//! An artifact root is a plain directory tree with two subdirectories:
//! `onnx/` holding one model per (set, mode) named `{SET}_{Mode}.onnx`, and
//! `cards/` holding one vocabulary per set named `{SET}.csv`. The store
//! trait abstracts the actual model runtime so the engine (and its tests)
//! never link against one directly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ArtifactError;

/// Subdirectory of an artifact root holding model files.
pub const MODEL_SUBDIR: &str = "onnx";
/// Subdirectory of an artifact root holding vocabulary files.
pub const VOCAB_SUBDIR: &str = "cards";

const MODEL_EXT: &str = "onnx";

// ─────────────────────────────────────────────────────────────────────────────
// Context Keys
// ─────────────────────────────────────────────────────────────────────────────

/// Draft mode half of an inference context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftMode {
    Premier,
    PickTwo,
    Quick,
    Traditional,
}

impl DraftMode {
    /// Mode component of the artifact file name.
    pub fn as_str(self) -> &'static str {
        match self {
            DraftMode::Premier => "Premier",
            DraftMode::PickTwo => "PickTwo",
            DraftMode::Quick => "Quick",
            DraftMode::Traditional => "Traditional",
        }
    }

    /// Single designated fallback mode when this mode's artifact is absent.
    ///
    /// Observed client behavior is one-directional: Premier drafts fall back
    /// to the PickTwo model, nothing else falls back at all.
    pub fn fallback(self) -> Option<DraftMode> {
        match self {
            DraftMode::Premier => Some(DraftMode::PickTwo),
            _ => None,
        }
    }
}

/// Identifies which artifact and vocabulary to use: (set code, draft mode).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextKey {
    pub set_code: String,
    pub mode: DraftMode,
}

impl ContextKey {
    pub fn new(set_code: impl Into<String>, mode: DraftMode) -> Self {
        Self {
            set_code: set_code.into(),
            mode,
        }
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.set_code, self.mode.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// On-Disk Layout
// ─────────────────────────────────────────────────────────────────────────────

/// Path of the model file for a context under a root.
pub fn model_path(root: &Path, key: &ContextKey) -> PathBuf {
    root.join(MODEL_SUBDIR)
        .join(format!("{}_{}.{MODEL_EXT}", key.set_code, key.mode.as_str()))
}

/// Path of the vocabulary file for a set under a root.
pub fn vocab_path(root: &Path, set_code: &str) -> PathBuf {
    root.join(VOCAB_SUBDIR).join(format!("{set_code}.csv"))
}

/// True if the root holds at least one model file.
///
/// Used during root resolution; an empty or missing `onnx/` directory means
/// the candidate is skipped.
pub fn root_has_artifacts(root: &Path) -> bool {
    let Ok(entries) = fs::read_dir(root.join(MODEL_SUBDIR)) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_EXT))
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Store Seam
// ─────────────────────────────────────────────────────────────────────────────

/// A loaded model capable of scoring every vocabulary entry.
pub trait InferenceSession {
    /// Run one forward pass.
    ///
    /// `collection` counts pool occurrences per vocabulary index and `pack`
    /// marks the cards under consideration (uniform non-zero weight). Must
    /// return one raw score per vocabulary entry.
    fn run(&self, collection: &[f32], pack: &[f32]) -> Result<Vec<f32>, ArtifactError>;
}

/// Loads artifacts and vocabularies from a resolved root.
///
/// Implemented by the host against its model runtime; the engine only sees
/// this seam. Loading is synchronous and may block for the duration of a
/// model parse.
pub trait ArtifactStore {
    type Session: InferenceSession;

    fn load_session(&self, path: &Path) -> Result<Self::Session, ArtifactError>;

    /// Load a vocabulary as an ordered card-name list (index i ↔ name).
    fn load_vocabulary(&self, path: &Path) -> Result<Vec<String>, ArtifactError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_path_encodes_set_and_mode() {
        let key = ContextKey::new("FDN", DraftMode::Premier);
        let path = model_path(Path::new("/models"), &key);
        assert_eq!(path, PathBuf::from("/models/onnx/FDN_Premier.onnx"));
    }

    #[test]
    fn vocab_path_encodes_set_only() {
        let path = vocab_path(Path::new("/models"), "DSK");
        assert_eq!(path, PathBuf::from("/models/cards/DSK.csv"));
    }

    #[test]
    fn only_premier_falls_back() {
        assert_eq!(DraftMode::Premier.fallback(), Some(DraftMode::PickTwo));
        assert_eq!(DraftMode::PickTwo.fallback(), None);
        assert_eq!(DraftMode::Quick.fallback(), None);
        assert_eq!(DraftMode::Traditional.fallback(), None);
    }

    #[test]
    fn missing_root_has_no_artifacts() {
        assert!(!root_has_artifacts(Path::new(
            "/definitely/not/a/real/models/dir"
        )));
    }
}
