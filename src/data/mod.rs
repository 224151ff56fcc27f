//! Built-in datasets: the labeled routing test set, the FAQ entries and
//! the order book.
//!
//! Exposed as constructor functions so the core stays testable against
//! synthetic datasets; nothing in the library reads these as ambient
//! globals.

use crate::eval::LabeledQuery;
use crate::faq::FaqEntry;
use crate::orders::OrderRecord;
use crate::router::RoutedIntent;

/// The FAQ dataset: canonical question keys and their stored answers, in
/// matching (insertion) order for the embedding cache.
pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "return policy",
            "You can return any item within 30 days of delivery for a full refund.",
        ),
        FaqEntry::new(
            "delivery time",
            "Standard delivery takes 3-5 business days.",
        ),
        FaqEntry::new(
            "shipping methods",
            "We offer standard, express and next-day shipping.",
        ),
        FaqEntry::new(
            "payment methods",
            "We accept credit cards, debit cards and PayPal.",
        ),
        FaqEntry::new(
            "gift cards",
            "Yes, we sell digital gift cards in amounts from $10 to $200.",
        ),
        FaqEntry::new(
            "discounts",
            "We run seasonal sales and offer a 10% student discount.",
        ),
        FaqEntry::new(
            "international shipping",
            "We ship to most countries worldwide, including Canada and Germany.",
        ),
        FaqEntry::new(
            "order tracking",
            "You can track your order with the tracking link in your confirmation email.",
        ),
        FaqEntry::new(
            "free shipping",
            "Orders over $50 qualify for free standard shipping.",
        ),
    ]
}

/// The fixed order book.
pub fn order_records() -> Vec<OrderRecord> {
    vec![
        OrderRecord::new("55551", "Laptop", "Processing"),
        OrderRecord::new("55552", "Widget", "Shipped"),
        OrderRecord::new("55553", "Headphones", "Delivered"),
        OrderRecord::new("55555", "Coffee Maker", "Processing"),
        OrderRecord::new("55557", "Desk Lamp", "Ready for pickup"),
        OrderRecord::new("55559", "Vacuum Cleaner", "Delivered"),
    ]
}

/// The labeled routing test set, in evaluation order.
///
/// Positional: the evaluator compares the routed intent for the query at
/// position `i` against the label at position `i`. Two queries carry
/// deliberate typos.
pub fn test_set() -> Vec<LabeledQuery> {
    use RoutedIntent::{Faq, OrderStatus};

    vec![
        LabeledQuery::new("Do you have a return policy?", Faq),
        LabeledQuery::new("How long does delivery usually take?", Faq),
        LabeledQuery::new("What are the shipping methods you provide?", Faq),
        LabeledQuery::new("Can I pay with PayPal?", Faq),
        LabeledQuery::new("Can I pay with MobilePay?", Faq),
        LabeledQuery::new("What payment methods do you accept?", Faq),
        LabeledQuery::new("Do you sell gift cards?", Faq),
        LabeledQuery::new("You don't sell gift card, right?", Faq),
        LabeledQuery::new("Is there a student discount?", Faq),
        LabeledQuery::new("Do you ship to Canada?", Faq),
        LabeledQuery::new("Do you ship to Germany?", Faq),
        LabeledQuery::new("Do you provide refunds?", Faq),
        LabeledQuery::new("Can I send items back within a month?", Faq),
        LabeledQuery::new(
            "I was wondering if after purchasing an item online, and then realizing two weeks \
             later that I don’t actually need it, would I still be able to send it back?",
            Faq,
        ),
        LabeledQuery::new("How can I track my order?", Faq),
        LabeledQuery::new("How can I check if my order is delivered?", Faq),
        LabeledQuery::new("Do you offer free shipping for orders?", Faq),
        LabeledQuery::new("I want to know about returns", Faq),
        LabeledQuery::new("Do you have discounts?", Faq),
        // typo on purpose
        LabeledQuery::new("Do you have a retunr polciy?", Faq),
        LabeledQuery::new("Can you tell me the status of order #55551?", OrderStatus),
        LabeledQuery::new("Status for order 55551 please", OrderStatus),
        LabeledQuery::new("Order 55551 — what’s happening with it?", OrderStatus),
        LabeledQuery::new("Is my order 55557 ready for pickup?", OrderStatus),
        LabeledQuery::new("Has order 55559 been delivered yet?", OrderStatus),
        LabeledQuery::new(
            "I’d like to know if my order 55551 has been processed?",
            OrderStatus,
        ),
        LabeledQuery::new("Check status of my order 55552 and 55552", OrderStatus),
        LabeledQuery::new("I want to check my order", OrderStatus),
        LabeledQuery::new("Has my order been shipped yet?", OrderStatus),
        LabeledQuery::new("Has my order #555 been shipped?", OrderStatus),
        LabeledQuery::new("Where is my package?", OrderStatus),
        LabeledQuery::new("Is my delivery on the way?", OrderStatus),
        LabeledQuery::new("Track my purchase", OrderStatus),
        LabeledQuery::new("Is the thing I ordered here yet?", OrderStatus),
        LabeledQuery::new("Did my stuff show up?", OrderStatus),
        LabeledQuery::new(
            "I ordered something last week, can you tell me if it’s shipped?",
            OrderStatus,
        ),
        LabeledQuery::new("I bought a vacuum cleaner, is it on the way?", OrderStatus),
        LabeledQuery::new("Tell me about my last purchase", OrderStatus),
        LabeledQuery::new("Did my purchase go through?", OrderStatus),
        // typo on purpose
        LabeledQuery::new("Is my delivry here?", OrderStatus),
    ]
}
