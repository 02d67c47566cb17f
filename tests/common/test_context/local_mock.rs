use crate::common::mock_server::AccountsMockServer;
use accounts_client::{apis::accounts::AccountData, AccountsClient};
use reqwest::Url;
use uuid::Uuid;

pub struct TestContext {
    pub client: AccountsClient,
    mock_server: AccountsMockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        // Setup a new mock server
        let mock_server = AccountsMockServer::start().await;

        // Configure a new AccountsClient to point to the mock server
        let client = AccountsClient::builder(mock_server.url().clone())
            .with_retry_policy(None) // Disable retries against the mock server
            .build();

        Self {
            client,
            mock_server,
        }
    }

    pub fn base_url(&self) -> &Url {
        self.mock_server.url()
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.mock_server.set_healthy(healthy);
    }

    pub fn stored_account(&self, id: &Uuid) -> Option<AccountData> {
        self.mock_server.stored_account(id)
    }
}
