use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, info, spotify, success, types::PkceToken};

pub async fn auth() {
    let config = super::load_config();
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));

    info!("Waiting for authorization in the browser...");
    match spotify::auth::auth(&config, shared_state).await {
        Ok(token) => success!("Authentication successful! Granted scope: {}", token.scope),
        Err(e) => error!("{}", e),
    }
}
