//! Semantic FAQ matching.
//!
//! [`FaqIndex`] embeds the canonical question keys exactly once per run;
//! the index is immutable afterwards and shared across every model
//! configuration. [`FaqAgent`] applies the confidence threshold and asks
//! the LLM to phrase the matched canned answer for the customer's query.


use std::sync::Arc;

use half::f16;
use thiserror::Error;
use tracing::{debug, info};

use crate::embedding::{EmbeddingError, QueryEmbedder, cosine_similarity_f16};
use crate::provider::{ChatBackend, ProviderError};

/// Response when the FAQ dataset or its embedding cache is empty.
pub const NO_DATA_MSG: &str = "FAQ data is not available.";

/// Response when the best match falls below the confidence threshold.
pub const LOW_CONFIDENCE_MSG: &str =
    "Sorry, we don't have an answer for that query. Please contact our support team.";

#[derive(Debug, Error)]
pub enum FaqError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A canonical question key and its stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub key: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(key: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            answer: answer.into(),
        }
    }
}

/// Best match for a query vector: entry index and cosine score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch {
    pub index: usize,
    pub score: f32,
}

/// Insertion-ordered FAQ entries plus their precomputed key embeddings.
#[derive(Debug)]
pub struct FaqIndex {
    entries: Vec<FaqEntry>,
    key_embeddings: Vec<Vec<f16>>,
}

impl FaqIndex {
    /// Embeds every FAQ key once and freezes the index.
    pub fn build(embedder: &QueryEmbedder, entries: Vec<FaqEntry>) -> Result<Self, EmbeddingError> {
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        let key_embeddings = embedder.embed_batch(&keys)?;

        info!(
            entry_count = entries.len(),
            embedding_dim = embedder.embedding_dim(),
            "FAQ key embeddings cached"
        );

        Ok(Self {
            entries,
            key_embeddings,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_embeddings(&self) -> bool {
        !self.key_embeddings.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    /// Stable argmax over the key embeddings.
    ///
    /// Ties break toward the lowest index (strict `>` while scanning in
    /// insertion order), so repeated calls with the same vector always pick
    /// the same entry.
    pub fn best_match(&self, query: &[f16]) -> Option<FaqMatch> {
        let mut best: Option<FaqMatch> = None;

        for (index, key_embedding) in self.key_embeddings.iter().enumerate() {
            let score = cosine_similarity_f16(query, key_embedding);
            match best {
                Some(current) if score <= current.score => {}
                _ => best = Some(FaqMatch { index, score }),
            }
        }

        best
    }
}

/// Answers FAQ-routed queries: nearest canned answer, thresholded, then
/// phrased conversationally by the LLM.
pub struct FaqAgent {
    embedder: Arc<QueryEmbedder>,
    index: Arc<FaqIndex>,
    chat: Arc<dyn ChatBackend>,
    threshold: f32,
}

impl FaqAgent {
    pub fn new(
        embedder: Arc<QueryEmbedder>,
        index: Arc<FaqIndex>,
        chat: Arc<dyn ChatBackend>,
        threshold: f32,
    ) -> Self {
        Self {
            embedder,
            index,
            chat,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Produces the agent response for an FAQ-routed query.
    ///
    /// Scores exactly at the threshold count as a match; only scores
    /// strictly below it are rejected.
    pub async fn answer(&self, query: &str) -> Result<String, FaqError> {
        if self.index.is_empty() || !self.index.has_embeddings() {
            return Ok(NO_DATA_MSG.to_string());
        }

        let query_embedding = self.embedder.embed(query)?;

        let Some(matched) = self.index.best_match(&query_embedding) else {
            return Ok(NO_DATA_MSG.to_string());
        };

        let entry = self
            .index
            .entry(matched.index)
            .expect("best_match index is in range");

        debug!(
            key = %entry.key,
            score = matched.score,
            threshold = self.threshold,
            "Nearest FAQ key"
        );

        if matched.score < self.threshold {
            debug!(score = matched.score, "Best FAQ match below threshold");
            return Ok(LOW_CONFIDENCE_MSG.to_string());
        }

        let system = rephrase_prompt(query, &entry.answer);
        let generated = self.chat.generate(&system, query).await?;

        Ok(generated.trim().to_string())
    }
}

impl std::fmt::Debug for FaqAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqAgent")
            .field("entries", &self.index.len())
            .field("threshold", &self.threshold)
            .finish()
    }
}

/// System prompt asking the LLM to adapt the canned answer to the query.
fn rephrase_prompt(query: &str, answer: &str) -> String {
    format!(
        "The customer asked: \"{query}\".\n\
         According to our company FAQ, the answer is: \"{answer}\".\n\
         If the FAQ answer does not directly address the customer's question, \
         please understand what the FAQ answer actually covers, \
         apply it logically to the query, and explain it shortly. \
         Do not leave unnecessary blank spaces and lines between the generated sentences."
    )
}
