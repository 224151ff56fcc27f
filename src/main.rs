//! Routebench entrypoint: evaluates every catalog model on the built-in
//! labeled test set and writes the comparison reports.

use std::sync::Arc;

use mimalloc::MiMalloc;

use routebench::config::Config;
use routebench::data;
use routebench::embedding::{EmbedderConfig, QueryEmbedder};
use routebench::eval::evaluate;
use routebench::faq::{FaqAgent, FaqIndex};
use routebench::provider::{GenaiChat, MODEL_CATALOG};
use routebench::report::ReportWriter;
use routebench::router::Router;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        out_dir = %config.out_dir.display(),
        faq_threshold = config.faq_threshold,
        "Routebench starting"
    );

    for spec in MODEL_CATALOG {
        if !spec.provider.credential_present() {
            tracing::warn!(
                provider = %spec.provider,
                env = spec.provider.credential_env(),
                "Provider credential not set; its models will fail at request time"
            );
        }
    }

    let embedder_config = if let Some(dir) = &config.embed_model_dir {
        EmbedderConfig::new(dir.clone())
    } else {
        tracing::warn!("No ROUTEBENCH_EMBED_MODEL_DIR configured, running embedder in stub mode");
        EmbedderConfig::stub()
    };
    let embedder = Arc::new(QueryEmbedder::load(embedder_config)?);

    // FAQ keys are embedded exactly once and shared across every model.
    let faq_index = Arc::new(FaqIndex::build(&embedder, data::faq_entries())?);
    let orders = data::order_records();
    let test_set = data::test_set();

    let writer = ReportWriter::create(&config.out_dir)?;

    for spec in MODEL_CATALOG {
        tracing::info!(model = spec.alias, provider = %spec.provider, "Evaluating model");

        let chat = Arc::new(GenaiChat::new(spec));
        let faq = FaqAgent::new(
            embedder.clone(),
            faq_index.clone(),
            chat.clone(),
            config.faq_threshold,
        );
        let router = Router::new(chat, faq, orders.clone());

        let report = evaluate(&router, &test_set).await?;

        tracing::info!(
            model = spec.alias,
            accuracy = format!("{:.2}", report.accuracy),
            total_time_ms = format!("{:.2}", report.total_time_ms),
            misclassified = report.misclassified.len(),
            "Model evaluated"
        );

        writer.append_model(spec.alias, &report)?;
    }

    println!(
        "Customer service bot evaluation is complete. Check '{}' for the agent responses.",
        writer.responses_path().display()
    );

    Ok(())
}
