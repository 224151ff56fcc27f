//! Routebench library crate (used by the binary and integration tests).
//!
//! An evaluation harness for a two-intent customer-service query router:
//! an LLM classifies each query as FAQ or order-status, the query is
//! dispatched to the matching agent, and routing accuracy is scored
//! against a labeled test set across a fixed catalog of models.
//!
//! The exports are organized by module:
//!
//! - [`Config`], [`ConfigError`] - environment-backed configuration
//! - [`QueryEmbedder`], [`EmbedderConfig`] - sentence embedding (stub mode
//!   available for tests)
//! - [`FaqIndex`], [`FaqAgent`] - semantic FAQ matching
//! - [`lookup`](orders::lookup), [`OrderRecord`] - order-status lookup
//! - [`Router`], [`RoutingResult`], [`RoutedIntent`] - classification and
//!   dispatch
//! - [`evaluate`], [`EvalReport`] - accuracy scoring
//! - [`ReportWriter`] - run artifacts
//! - [`MODEL_CATALOG`], [`ChatBackend`], [`GenaiChat`] - provider clients
//!
//! Mock implementations are available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod config;
pub mod data;
pub mod embedding;
pub mod eval;
pub mod faq;
pub mod orders;
pub mod provider;
pub mod report;
pub mod router;

pub use config::{Config, ConfigError, DEFAULT_FAQ_THRESHOLD, DEFAULT_OUT_DIR};
pub use embedding::{
    EmbedderConfig, EmbeddingError, QUERY_EMBEDDING_DIM, QUERY_MAX_SEQ_LEN, QueryEmbedder,
    cosine_similarity_f16,
};
pub use eval::{EvalError, EvalReport, LabeledQuery, evaluate};
pub use faq::{FaqAgent, FaqEntry, FaqError, FaqIndex, FaqMatch, LOW_CONFIDENCE_MSG, NO_DATA_MSG};
pub use orders::{NO_MATCH_MSG, NO_ORDERS_MSG, OrderRecord};
pub use provider::{
    ChatBackend, GenaiChat, MODEL_CATALOG, ModelSpec, Provider, ProviderError, find_model,
};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockChat;
pub use report::{COMPARISON_FILENAME, RESPONSES_FILENAME, ReportError, ReportWriter};
pub use router::{
    BatchOutcome, CLASSIFIER_SYSTEM_PROMPT, RoutedIntent, Router, RouterError, RoutingResult,
    UNKNOWN_INTENT_MSG,
};
