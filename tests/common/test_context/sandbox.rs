use accounts_client::AccountsClient;
use reqwest::Url;

pub struct TestContext {
    pub client: AccountsClient,
    base_url: Url,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the address of a running accounts service from the env
        let base_url = Url::parse(
            &std::env::var("ACCEPTANCE_TESTS_BASE_URL")
                .unwrap_or_else(|_| "http://accountapi:8080".to_string()),
        )
        .unwrap();

        let client = AccountsClient::builder(base_url.clone()).build();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
