use std::sync::Arc;

use path_lemmatizer::application::services::{
    BatchUpdater, JobRunner, NormalizationContext, Tokenizer,
};
use path_lemmatizer::infrastructure::morphology::NormalizerFactory;
use path_lemmatizer::infrastructure::notification::NotifierFactory;
use path_lemmatizer::infrastructure::observability::{TracingConfig, init_tracing};
use path_lemmatizer::infrastructure::persistence::{
    PgDocumentStore, PgRunLogRepository, create_pool, database_url,
};
use path_lemmatizer::presentation::{Environment, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default());

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    let normalizer = NormalizerFactory::create(&settings.normalizer)?;
    let context = NormalizationContext::new(Tokenizer::default(), normalizer);

    let pool = create_pool(
        &database_url(&settings.database.url, &settings.database.name),
        settings.database.max_connections,
    )?;

    let runner = JobRunner::new(
        BatchUpdater::new(
            Arc::new(PgDocumentStore::new(pool.clone())),
            settings.batch.options(),
        ),
        Arc::new(PgRunLogRepository::new(pool.clone())),
        NotifierFactory::create(&settings.notification),
        settings
            .version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
    );

    let report = runner.run(&context).await;

    pool.close().await;
    tracing::info!(status = %report.status, "Disconnected from database");

    Ok(())
}
