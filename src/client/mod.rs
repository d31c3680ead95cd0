//! Typed consumer of the HTTP API: stores the issued token, attaches it to
//! every request, and clears the session on any 401.

pub mod storage;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::models::{Product, ProductPage, ProductPayload};
use storage::TokenStore;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user_data";

#[derive(Debug)]
pub enum ClientError {
    /// The server answered 401 on an authenticated call. Stored credentials
    /// have already been cleared; the UI should return to the login view.
    SessionExpired,
    /// The server rejected the input (400), with the itemized rule list.
    Rejected { error: String, details: Vec<String> },
    /// Any other non-success response.
    Api { status: StatusCode, error: String },
    Transport(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::SessionExpired => write!(f, "Session expired"),
            ClientError::Rejected { error, details } => {
                write!(f, "{error}: {}", details.join(", "))
            }
            ClientError::Api { status, error } => write!(f, "{status}: {error}"),
            ClientError::Transport(err) => write!(f, "Transport error: {err}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub role: String,
}

pub struct ApiClient<S> {
    http: Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// Authenticate and persist `{token, user}` on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.logout();
            }
            return Err(rejection(status, body));
        }

        let token = body["token"].as_str().ok_or(ClientError::Api {
            status,
            error: "Resposta de login sem token".to_string(),
        })?;
        let user: SessionUser =
            serde_json::from_value(body["user"].clone()).map_err(|_| ClientError::Api {
                status,
                error: "Resposta de login sem usuário".to_string(),
            })?;

        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, &body["user"].to_string());

        Ok(user)
    }

    pub async fn products(
        &self,
        page: i64,
        limit: i64,
        active: &str,
    ) -> Result<ProductPage, ClientError> {
        let req = self.http.get(self.url("/products")).query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("active", active.to_string()),
        ]);
        let body = self.dispatch(req).await?;
        decode(body)
    }

    pub async fn product(&self, id: i64) -> Result<Product, ClientError> {
        let req = self.http.get(self.url(&format!("/products/{id}")));
        let body = self.dispatch(req).await?;
        decode(body)
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ClientError> {
        let req = self.http.post(self.url("/products")).json(payload);
        let body = self.dispatch(req).await?;
        decode(body)
    }

    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Product, ClientError> {
        let req = self
            .http
            .put(self.url(&format!("/products/{id}")))
            .json(payload);
        let body = self.dispatch(req).await?;
        decode(body)
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ClientError> {
        let req = self.http.delete(self.url(&format!("/products/{id}")));
        self.dispatch(req).await?;
        Ok(())
    }

    /// Send an authenticated request. A 401 clears the stored session before
    /// surfacing, so the caller lands back at login with a clean slate.
    async fn dispatch(&self, req: RequestBuilder) -> Result<Value, ClientError> {
        let req = match self.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body: Value = resp.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(body);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.logout();
            return Err(ClientError::SessionExpired);
        }

        Err(rejection(status, body))
    }
}

fn rejection(status: StatusCode, body: Value) -> ClientError {
    let error = body["error"]
        .as_str()
        .unwrap_or("Erro de conexão com o servidor")
        .to_string();

    if status == StatusCode::BAD_REQUEST {
        let details = body["details"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|d| d.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        return ClientError::Rejected { error, details };
    }

    ClientError::Api { status, error }
}

fn decode<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ClientError> {
    serde_json::from_value(body).map_err(|_| ClientError::Api {
        status: StatusCode::OK,
        error: "Resposta inesperada do servidor".to_string(),
    })
}
