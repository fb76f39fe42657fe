//! Model-derived card ratings
//!
//! The engine consumes pre-trained per-(set, mode) artifacts through the
//! [`ArtifactStore`] seam, caches loaded sessions and vocabularies, and
//! normalizes raw scores into the 0-100 scale the overlay renders.

mod engine;
mod error;
mod store;


pub use engine::{RatingEngine, RatingMap, default_candidate_roots};
pub use error::ArtifactError;
pub use store::{
    ArtifactStore, ContextKey, DraftMode, InferenceSession, MODEL_SUBDIR, VOCAB_SUBDIR,
    model_path, root_has_artifacts, vocab_path,
};
