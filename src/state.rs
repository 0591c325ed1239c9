use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

// Handle cloned into every handler: where the ledger file lives, and the one
// in-memory snapshot every command replaces wholesale.
#[derive(Clone)]
pub struct AppState {
    pub ledger_path: PathBuf,
    pub ledger: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(ledger_path: PathBuf, data: AppData) -> Self {
        Self {
            ledger_path,
            ledger: Arc::new(Mutex::new(data)),
        }
    }
}
