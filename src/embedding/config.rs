use std::path::{Path, PathBuf};

use super::error::EmbeddingError;

/// Output dimension of the MiniLM-class sentence encoder.
pub const QUERY_EMBEDDING_DIM: usize = 384;

/// Maximum number of tokens fed into the encoder per query.
pub const QUERY_MAX_SEQ_LEN: usize = 256;

/// Configuration for [`QueryEmbedder`](super::QueryEmbedder).
///
/// Points at a model directory containing `config.json`, `tokenizer.json`
/// and `model.safetensors`. Use [`EmbedderConfig::stub`] for tests and
/// runs without model files.
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Directory holding the BERT config, tokenizer and weights.
    pub model_dir: PathBuf,

    /// Output embedding dimension. Must not exceed the model hidden size.
    pub embedding_dim: usize,

    /// Token truncation length for long queries.
    pub max_seq_len: usize,

    /// Run with a deterministic hash-seeded backend instead of a model.
    pub testing_stub: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            embedding_dim: QUERY_EMBEDDING_DIM,
            max_seq_len: QUERY_MAX_SEQ_LEN,
            testing_stub: false,
        }
    }
}

impl EmbedderConfig {
    /// Creates a config for a model directory.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub-mode config (no model files required).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join("tokenizer.json")
    }

    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    /// Returns `true` if all model files are present on disk.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty()
            && file_exists(&self.config_path())
            && file_exists(&self.tokenizer_path())
            && file_exists(&self.weights_path())
    }

    /// Validates the config (stub mode always passes).
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is empty and testing_stub is false".to_string(),
            });
        }

        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be non-zero".to_string(),
            });
        }

        if !self.model_available() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }
}

fn file_exists(path: &Path) -> bool {
    path.is_file()
}
