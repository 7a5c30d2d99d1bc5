use crate::config::Config;
use crate::error::RlResult;
use crate::listener::ReflectiveListener;
use crate::metric::ParaMetric;
use crate::services::http::build_client;
use crate::services::{HttpEmbedder, HttpParaphraser, LanguageToolChecker};
use reqwest::blocking::Client;
use std::path::Path;
use tracing::info;

pub type HttpParaMetric = ParaMetric<HttpEmbedder, LanguageToolChecker>;
pub type HttpReflectiveListener =
    ReflectiveListener<HttpParaphraser, HttpEmbedder, LanguageToolChecker>;

fn metric_with_client(client: &Client, config: &Config) -> HttpParaMetric {
    let services = &config.services;
    let embedder = HttpEmbedder::new(client.clone(), services.embedding_url.as_str());
    let grammar = LanguageToolChecker::new(
        client.clone(),
        services.grammar_url.as_str(),
        services.grammar_language.as_str(),
    );
    ParaMetric::new(embedder, grammar).with_weights(config.weights)
}

/// Service: ParaMetric backed by the configured embedding and grammar services.
pub fn load_metric(config: &Config) -> RlResult<HttpParaMetric> {
    let client = build_client()?;
    Ok(metric_with_client(&client, config))
}

/// Service: full listener pipeline backed by the configured services.
pub fn load_listener(config: &Config) -> RlResult<HttpReflectiveListener> {
    let client = build_client()?;
    let metric = metric_with_client(&client, config);
    let paraphraser = HttpParaphraser::new(
        client,
        config.services.paraphraser_url.as_str(),
        config.services.device,
    );
    Ok(ReflectiveListener::new(paraphraser, metric))
}

pub fn load_listener_from_file<P: AsRef<Path>>(path: P) -> RlResult<HttpReflectiveListener> {
    let path = path.as_ref();
    info!("API: Loading configuration from {:?}", path);
    let config = Config::load_from_file(path)?;
    load_listener(&config)
}
