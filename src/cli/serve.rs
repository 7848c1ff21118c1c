use std::sync::Arc;

use crate::{error, server};

pub async fn serve() {
    let session = Arc::new(super::load_session().await);

    if let Err(e) = server::start_app_server(session).await {
        error!("Server stopped: {}", e);
    }
}
