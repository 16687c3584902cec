//! Session bootstrap tests

use tinyembed_domain::error::Error;
use tinyembed_domain::value_objects::{EncodingFormat, ModelState};
use tinyembed_infrastructure::config::AppConfig;
use tinyembed_infrastructure::init_app;

fn null_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.runtime.provider = "null".to_string();
    config
}

#[test]
fn test_invalid_config_rejected_before_wiring() {
    let mut config = null_config();
    config.runtime.timeout_secs = 0;
    assert!(matches!(
        init_app(config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_context_keeps_config() {
    let context = init_app(null_config()).unwrap();
    assert_eq!(context.config.runtime.provider, "null");
    assert_eq!(context.event_bus().subscriber_count(), 0);
}

#[tokio::test]
async fn test_null_runtime_end_to_end() {
    let context = init_app(null_config()).unwrap();
    let session = context.session();
    let model = context.config.runtime.model.clone();

    session.initialize().await.unwrap();
    session.load_model(&model, EncodingFormat::Float).await.unwrap();
    assert!(session.state().await.is_ready());

    session.add_document("the quick brown fox").await.unwrap();
    session.add_document("a lazy dog sleeps").await.unwrap();
    let results = session.search("quick brown fox", Some(1)).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);

    session.unload_model().await.unwrap();
    assert_eq!(session.state().await, ModelState::CapabilityChecked);
    assert_eq!(session.document_count().await, 0);
}
