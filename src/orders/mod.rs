//! Order-status lookup.
//!
//! Order IDs are matched as whole digit runs extracted from the query; no
//! partial-ID matching and no fuzzy correction of order numbers.


use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// A single order in the store's (fixed) order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: String,
    pub product: String,
    pub status: String,
}

impl OrderRecord {
    pub fn new(
        id: impl Into<String>,
        product: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product: product.into(),
            status: status.into(),
        }
    }
}

/// Response when the order book is empty.
pub const NO_ORDERS_MSG: &str = "There are currently no orders in the system.";

/// Response when no extracted ID matches an order.
pub const NO_MATCH_MSG: &str = "Sorry, no matching order ID was found in the query.";

static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit-run pattern is valid"));

/// Reports the status of every order whose ID appears in the query.
///
/// Candidate IDs are the deduplicated maximal digit runs in the query;
/// matched orders are reported in order-book order (not query order), one
/// sentence per order, joined by a single space.
pub fn lookup(query: &str, orders: &[OrderRecord]) -> String {
    if orders.is_empty() {
        return NO_ORDERS_MSG.to_string();
    }

    let candidates: HashSet<&str> = DIGIT_RUNS.find_iter(query).map(|m| m.as_str()).collect();

    debug!(
        candidate_count = candidates.len(),
        order_count = orders.len(),
        "Extracted candidate order IDs"
    );

    let matched: Vec<String> = orders
        .iter()
        .filter(|order| candidates.contains(order.id.as_str()))
        .map(|order| format!("Order {} ({}) is {}.", order.id, order.product, order.status))
        .collect();

    if matched.is_empty() {
        return NO_MATCH_MSG.to_string();
    }

    matched.join(" ")
}
