//! Application state: the cipher table and the loaded configuration.
//!
//! Both are fixed at startup. Handlers only read them, so the state is shared
//! as a plain `Arc<AppState>` with no locking.

use tracing::{info, instrument};

use crate::cipher::CipherMap;
use crate::config::AppConfig;
use crate::error::CipherError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub cipher: CipherMap,
    pub config: AppConfig,
}

impl AppState {
    /// Build the Al Bhed table and attach `config`. A malformed table aborts startup.
    #[instrument(level = "info", skip_all)]
    pub fn new(config: AppConfig) -> Result<Self, CipherError> {
        let cipher = CipherMap::al_bhed()?;
        info!(target: "albhed_quiz", addr = %config.socket_addr(), static_dir = %config.static_dir, "Cipher table ready");
        Ok(Self { cipher, config })
    }
}
