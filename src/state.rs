use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::credentials::CredentialVerifier;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub credentials: Arc<dyn CredentialVerifier>,
}
