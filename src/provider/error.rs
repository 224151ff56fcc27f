use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport, auth or quota failure on the upstream call. Not retried
    /// anywhere; a failing provider aborts the run.
    #[error("chat request to '{model}' failed: {reason}")]
    RequestFailed { model: String, reason: String },

    /// The provider answered but produced no text content.
    #[error("chat response from '{model}' contained no text")]
    EmptyResponse { model: String },

    /// Alias not present in the model catalog.
    #[error("unknown model alias '{alias}'")]
    UnknownAlias { alias: String },
}
