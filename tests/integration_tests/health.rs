use crate::common::test_context::TestContext;
use accounts_client::AccountsClient;
use reqwest::Url;

#[tokio::test]
async fn service_is_healthy() {
    let ctx = TestContext::start().await;

    assert!(ctx.client.health.status().await);
}

#[cfg(not(feature = "acceptance-tests"))]
#[tokio::test]
async fn service_is_unhealthy() {
    let ctx = TestContext::start().await;
    ctx.set_healthy(false);

    assert!(!ctx.client.health.status().await);
}

#[tokio::test]
async fn unreachable_service_is_unhealthy() {
    let client = AccountsClient::new(Url::parse("http://127.0.0.1:1").unwrap());

    assert!(!client.health.status().await);
}
