use std::sync::Arc;

use crate::middleware::security::SecurityPolicy;
use crate::store::AccountStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub security: SecurityPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, security: SecurityPolicy) -> Self {
        Self { store, security }
    }
}
