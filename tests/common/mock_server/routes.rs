use crate::common::mock_server::MockServerState;
use accounts_client::apis::accounts::{
    AccountAttributes, AccountResponse, CreateAccountRequest, Links,
};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use uuid::Uuid;

#[derive(Deserialize)]
pub(super) struct DeleteQuery {
    version: i64,
}

/// GET /v1/health
pub(super) async fn health(state: web::Data<MockServerState>) -> HttpResponse {
    if state.healthy.load(Ordering::SeqCst) {
        HttpResponse::Ok().json(json!({ "status": "up" }))
    } else {
        HttpResponse::ServiceUnavailable().finish()
    }
}

/// POST /v1/organisation/accounts
pub(super) async fn create_account(
    state: web::Data<MockServerState>,
    request: web::Json<CreateAccountRequest>,
) -> HttpResponse {
    let mut account = request.into_inner().data;

    let failures = validate(&account.attributes);
    if !failures.is_empty() {
        return error_response(
            HttpResponse::BadRequest(),
            format!("validation failure list:\n{}", failures.join("\n")),
        );
    }

    let mut accounts = state.accounts.write().unwrap();
    if accounts.contains_key(&account.id) {
        return error_response(
            HttpResponse::Conflict(),
            "Account cannot be created as it violates a duplicate constraint".to_string(),
        );
    }

    let now = Utc::now();
    account.created_on = Some(now);
    account.modified_on = Some(now);
    accounts.insert(account.id, account.clone());

    HttpResponse::Created().json(AccountResponse {
        links: self_link(&account.id),
        data: account,
    })
}

/// GET /v1/organisation/accounts/{id}
pub(super) async fn fetch_account(
    state: web::Data<MockServerState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    state.accounts.read().unwrap().get(&id).map_or_else(
        || {
            error_response(
                HttpResponse::NotFound(),
                format!("record {} does not exist", id),
            )
        },
        |account| {
            HttpResponse::Ok().json(AccountResponse {
                data: account.clone(),
                links: self_link(&id),
            })
        },
    )
}

/// DELETE /v1/organisation/accounts/{id}?version={version}
pub(super) async fn delete_account(
    state: web::Data<MockServerState>,
    path: web::Path<Uuid>,
    query: web::Query<DeleteQuery>,
) -> HttpResponse {
    let id = path.into_inner();

    let mut accounts = state.accounts.write().unwrap();
    match accounts.get(&id) {
        None => HttpResponse::NotFound().finish(),
        Some(account) if account.version != query.version => {
            error_response(HttpResponse::Conflict(), "invalid version".to_string())
        }
        Some(_) => {
            accounts.remove(&id);
            HttpResponse::NoContent().finish()
        }
    }
}

fn validate(attributes: &AccountAttributes) -> Vec<String> {
    let mut failures = vec![];

    let country = &attributes.country;
    if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
        failures.push("country in body should match '^[A-Z]{2}$'".to_string());
    }

    if attributes.name.iter().all(|name| name.trim().is_empty()) {
        failures.push("name in body is required".to_string());
    }

    failures
}

fn self_link(id: &Uuid) -> Links {
    Links {
        self_link: Some(format!("/v1/organisation/accounts/{}", id)),
    }
}

fn error_response(
    mut builder: actix_web::HttpResponseBuilder,
    error_message: String,
) -> HttpResponse {
    builder.json(json!({ "error_message": error_message }))
}
