//! Shared helpers for driving the account API in-process.
#![allow(dead_code)]

use std::sync::Arc;

use accounts_backend::app::create_app;
use accounts_backend::middleware::security::SecurityPolicy;
use accounts_backend::state::AppState;
use accounts_backend::store::{AccountStore, MemoryAccountStore};
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const BASE_URL: &str = "/accounts";

/// Generates valid account payloads with realistic-looking values.
#[derive(Debug, Clone)]
pub struct AccountFactory {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

impl AccountFactory {
    pub fn build() -> Self {
        let building: String = BuildingNumber().fake();
        let street: String = StreetName().fake();
        let city: String = CityName().fake();
        let days: i64 = (0i64..18_000).fake();
        Self {
            name: Name().fake(),
            email: SafeEmail().fake(),
            address: format!("{} {}, {}", building, street, city),
            phone_number: PhoneNumber().fake(),
            date_joined: NaiveDate::from_ymd_opt(1975, 1, 1).unwrap() + chrono::Duration::days(days),
        }
    }

    pub fn serialize(&self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "address": self.address,
            "phone_number": self.phone_number,
            "date_joined": self.date_joined.to_string(),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryAccountStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(SecurityPolicy::new(false))
    }

    pub fn with_policy(policy: SecurityPolicy) -> Self {
        let store = MemoryAccountStore::new();
        let router = create_app(AppState::new(Arc::new(store.clone()), policy));
        Self { router, store }
    }

    pub fn with_store(store: Arc<dyn AccountStore>) -> Router {
        create_app(AppState::new(store, SecurityPolicy::new(false)))
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        send(&self.router, request).await
    }

    /// Posts `count` factory accounts and returns them with their assigned ids.
    pub async fn create_accounts(&self, count: usize) -> Vec<(i64, AccountFactory)> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            let account = AccountFactory::build();
            let response = self.send(json_request(Method::POST, BASE_URL, &account.serialize())).await;
            assert_eq!(response.status(), 201, "Could not create test Account");
            let body = body_json(response).await;
            created.push((body["id"].as_i64().unwrap(), account));
        }
        created
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost")
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    request_with_content_type(method, uri, "application/json", body)
}

pub fn request_with_content_type(method: Method, uri: &str, content_type: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
