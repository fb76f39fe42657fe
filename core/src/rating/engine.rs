//! Rating engine: artifact lifecycle plus pool-aware inference
//!
//! Owns the per-context session and per-set vocabulary caches, resolves the
//! artifact root lazily, and turns a drafted pool into a 0-100 rating per
//! vocabulary card. Every failure path degrades to an empty rating map; the
//! overlay hides itself instead of surfacing an error to the player.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use tracing::{debug, error, info, warn};

use super::error::ArtifactError;
use super::store::{
    ArtifactStore, ContextKey, model_path, root_has_artifacts, vocab_path,
};

/// Card name → rating in [0, 100], one decimal. Rebuilt wholesale per call.
pub type RatingMap = HashMap<String, f32>;

/// Logistic steepness applied to standardized raw scores.
const RATING_STEEPNESS: f64 = 1.2;

/// Rating assigned to every card when the raw scores are uniform.
const NEUTRAL_RATING: f32 = 50.0;

/// Candidate artifact roots in priority order: the platform data directory
/// (where downloaded model updates land) first, then the bundled `models/`
/// tree next to the executable.
pub fn default_candidate_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(data) = dirs::data_dir() {
        roots.push(data.join("picklens").join("models"));
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir.join("models"));
    }
    roots
}

/// Loads, caches, and evaluates inference artifacts.
pub struct RatingEngine<S: ArtifactStore> {
    store: S,
    override_root: Option<PathBuf>,
    candidate_roots: Vec<PathBuf>,
    /// `None` = not yet resolved; `Some(None)` = resolved to nothing
    resolved_root: Option<Option<PathBuf>>,
    sessions: HashMap<ContextKey, S::Session>,
    vocabularies: HashMap<String, Vec<String>>,
    current_ratings: RatingMap,
    current_context: Option<ContextKey>,
}

impl<S: ArtifactStore> RatingEngine<S> {
    /// Engine over the default candidate roots.
    pub fn new(store: S) -> Self {
        Self::with_roots(store, default_candidate_roots())
    }

    /// Engine over an explicit ordered list of candidate roots.
    pub fn with_roots(store: S, candidate_roots: Vec<PathBuf>) -> Self {
        Self {
            store,
            override_root: None,
            candidate_roots,
            resolved_root: None,
            sessions: HashMap::new(),
            vocabularies: HashMap::new(),
            current_ratings: RatingMap::new(),
            current_context: None,
        }
    }

    /// Repoint the artifact root.
    ///
    /// Invalidates every cached session, vocabulary, and the current
    /// ratings; the next call re-resolves from scratch.
    pub fn set_model_directory(&mut self, root: Option<PathBuf>) {
        self.override_root = root;
        self.resolved_root = None;
        self.sessions.clear();
        self.vocabularies.clear();
        self.clear_ratings();
    }

    /// First root (override, then candidates) with a non-empty artifact
    /// collection. Cached until the directory is repointed.
    pub fn resolve_root(&mut self) -> Option<PathBuf> {
        if let Some(cached) = &self.resolved_root {
            return cached.clone();
        }

        let resolved = self
            .override_root
            .iter()
            .chain(self.candidate_roots.iter())
            .find(|root| root_has_artifacts(root))
            .cloned();

        match &resolved {
            Some(root) => info!(root = %root.display(), "Resolved artifact root"),
            None => warn!("No artifact root with models found"),
        }
        self.resolved_root = Some(resolved.clone());
        resolved
    }

    /// Compute ratings for every vocabulary card given the drafted pool.
    ///
    /// Returns an empty map when no artifact resolves for the context or
    /// when loading/inference fails; the failure is logged, never raised.
    pub fn compute_ratings(&mut self, pool_names: &[String], context: &ContextKey) -> RatingMap {
        let Some(root) = self.resolve_root() else {
            return RatingMap::new();
        };

        if !self.ensure_session(&root, context) {
            return RatingMap::new();
        }
        if !self.ensure_vocabulary(&root, &context.set_code) {
            return RatingMap::new();
        }

        // Both lookups hit the caches populated above
        let session = &self.sessions[context];
        let vocab = &self.vocabularies[&context.set_code];

        let raw = match run_inference(session, vocab, pool_names) {
            Ok(raw) => raw,
            Err(e) => {
                error!(context = %context, error = %e, "Inference failed");
                return RatingMap::new();
            }
        };

        let ratings = normalize_scores(&raw);
        let map: RatingMap = vocab
            .iter()
            .zip(ratings)
            .map(|(name, rating)| (name.clone(), rating))
            .collect();

        debug!(context = %context, cards = map.len(), "Computed ratings");
        self.current_ratings = map.clone();
        self.current_context = Some(context.clone());
        map
    }

    /// Current rating for a card, if ratings have been computed.
    pub fn rating_for(&self, card_name: &str) -> Option<f32> {
        self.current_ratings.get(card_name).copied()
    }

    /// True once a rating map has been computed and not cleared since.
    pub fn has_ratings(&self) -> bool {
        !self.current_ratings.is_empty()
    }

    /// Drop the current ratings (e.g. when leaving the draft context).
    pub fn clear_ratings(&mut self) {
        self.current_ratings.clear();
        self.current_context = None;
    }

    /// Load and cache the session for a context, honoring the mode fallback.
    /// Returns false when no artifact is available.
    fn ensure_session(&mut self, root: &Path, context: &ContextKey) -> bool {
        if self.sessions.contains_key(context) {
            return true;
        }

        let mut modes = vec![context.mode];
        modes.extend(context.mode.fallback());

        for mode in modes {
            let key = ContextKey::new(context.set_code.clone(), mode);
            let path = model_path(root, &key);
            match self.store.load_session(&path) {
                Ok(session) => {
                    info!(path = %path.display(), "Loaded inference artifact");
                    // Cache under the requested context, fallback included
                    self.sessions.insert(context.clone(), session);
                    return true;
                }
                Err(ArtifactError::NotFound { .. }) => continue,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to load artifact");
                    return false;
                }
            }
        }

        warn!(set = %context.set_code, "No inference artifact for set");
        false
    }

    /// Load and cache the vocabulary for a set. Returns false when absent.
    fn ensure_vocabulary(&mut self, root: &Path, set_code: &str) -> bool {
        if self.vocabularies.contains_key(set_code) {
            return true;
        }

        let path = vocab_path(root, set_code);
        match self.store.load_vocabulary(&path) {
            Ok(names) => {
                info!(path = %path.display(), cards = names.len(), "Loaded vocabulary");
                self.vocabularies.insert(set_code.to_string(), names);
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Vocabulary unavailable");
                false
            }
        }
    }
}

/// Build both feature vectors and run one forward pass.
fn run_inference<T: super::store::InferenceSession>(
    session: &T,
    vocab: &[String],
    pool_names: &[String],
) -> Result<Vec<f32>, ArtifactError> {
    let index: HashMap<&str, usize> = vocab
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // Collection vector counts pool occurrences; names outside the
    // vocabulary are ignored
    let mut collection = vec![0.0f32; vocab.len()];
    for name in pool_names {
        if let Some(&i) = index.get(name.as_str()) {
            collection[i] += 1.0;
        }
    }

    // Pack vector considers every card uniformly
    let pack = vec![1.0f32; vocab.len()];

    let raw = session.run(&collection, &pack)?;
    if raw.len() != vocab.len() {
        return Err(ArtifactError::ScoreCountMismatch {
            expected: vocab.len(),
            got: raw.len(),
        });
    }
    Ok(raw)
}

/// Map raw scores onto [0, 100] via a logistic around the mean.
///
/// Uniform inputs (population std of zero) collapse to the neutral rating.
/// Results are rounded to one decimal.
fn normalize_scores(raw: &[f32]) -> Vec<f32> {
    if raw.is_empty() {
        return Vec::new();
    }

    let n = raw.len() as f64;
    let mean = raw.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let variance = raw
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / n;
    let std = variance.sqrt();

    raw.iter()
        .map(|&v| {
            if std > 0.0 {
                let z = (f64::from(v) - mean) / std;
                let rating = 100.0 / (1.0 + (-RATING_STEEPNESS * z).exp());
                round_one_decimal(rating)
            } else {
                NEUTRAL_RATING
            }
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f32 {
    ((value * 10.0).round() / 10.0) as f32
}
