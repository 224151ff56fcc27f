//! Routing-accuracy evaluation over a labeled query set.
//!
//! Comparison is strictly positional: the labeled example at position `i`
//! supplies both the query that gets routed and the label the result is
//! compared against, so query/label misalignment cannot occur.


use thiserror::Error;
use tracing::info;

use crate::router::{RoutedIntent, Router, RouterError, RoutingResult};

#[derive(Debug, Error)]
pub enum EvalError {
    /// Accuracy over zero examples is undefined; empty input is rejected
    /// up front instead of dividing by zero.
    #[error("evaluation requires a non-empty test set")]
    EmptyTestSet,

    #[error(transparent)]
    Router(#[from] RouterError),
}

/// A query with its expected routing intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledQuery {
    pub query: String,
    pub intent: RoutedIntent,
}

impl LabeledQuery {
    pub fn new(query: impl Into<String>, intent: RoutedIntent) -> Self {
        Self {
            query: query.into(),
            intent,
        }
    }
}

/// Aggregate outcome of one model's evaluation run.
#[derive(Debug)]
pub struct EvalReport {
    /// Per-query routing results, in test-set order.
    pub results: Vec<RoutingResult>,

    /// Accumulated classification latency across the batch, in ms.
    pub total_time_ms: f64,

    /// Percentage of exactly-matched intents, `0.0..=100.0`.
    pub accuracy: f64,

    /// 1-based indices of the misclassified examples.
    pub misclassified: Vec<usize>,
}

/// Routes every labeled query through `router` and scores the predictions.
pub async fn evaluate(router: &Router, examples: &[LabeledQuery]) -> Result<EvalReport, EvalError> {
    if examples.is_empty() {
        return Err(EvalError::EmptyTestSet);
    }

    let queries: Vec<&str> = examples.iter().map(|e| e.query.as_str()).collect();
    let outcome = router.route_batch(&queries).await?;

    let mut matches = 0usize;
    let mut misclassified = Vec::new();

    for (i, (result, example)) in outcome.results.iter().zip(examples).enumerate() {
        if result.routed_intent == example.intent {
            matches += 1;
        } else {
            misclassified.push(i + 1);
        }
    }

    let accuracy = (matches as f64 / examples.len() as f64) * 100.0;

    info!(
        examples = examples.len(),
        matches,
        accuracy,
        total_time_ms = outcome.total_time_ms,
        "Evaluation complete"
    );

    Ok(EvalReport {
        results: outcome.results,
        total_time_ms: outcome.total_time_ms,
        accuracy,
        misclassified,
    })
}
