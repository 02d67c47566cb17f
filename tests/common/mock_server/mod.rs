mod routes;

use accounts_client::apis::accounts::AccountData;
use actix_web::{web, App, HttpServer};
use reqwest::Url;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
};
use tokio::sync::oneshot;
use uuid::Uuid;

#[derive(Default)]
struct MockServerStateInner {
    healthy: AtomicBool,
    accounts: RwLock<HashMap<Uuid, AccountData>>,
}

/// In-memory state of the mock server, shared with the test.
type MockServerState = Arc<MockServerStateInner>;

/// Simple mock server for the accounts API used in local integration tests.
pub struct AccountsMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    state: MockServerState,
}

impl AccountsMockServer {
    pub async fn start() -> Self {
        let state = MockServerState::default();
        state.healthy.store(true, Ordering::SeqCst);
        let state_clone = state.clone();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(web::resource("/v1/health").route(web::get().to(routes::health)))
                .service(
                    web::resource("/v1/organisation/accounts")
                        .route(web::post().to(routes::create_account)),
                )
                .service(
                    web::resource("/v1/organisation/accounts/{id}")
                        .route(web::get().to(routes::fetch_account))
                        .route(web::delete().to(routes::delete_account)),
                )
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
            state: state_clone,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.state.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn stored_account(&self, id: &Uuid) -> Option<AccountData> {
        self.state.accounts.read().unwrap().get(id).cloned()
    }
}

impl Drop for AccountsMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
