use crate::config::Config;
use crate::store::StudentStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The store behind its single exclusive-access boundary. Handlers take the
/// read guard for lookups and the write guard for the whole
/// find-validate-commit sequence of a mutation.
pub type SharedStore = Arc<RwLock<StudentStore>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: StudentStore, config: Config) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}
