//! The person directory server.

use people_web::{MemoryStore, PersonController, Server, ServerOptions};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    info!("Starting `{}`...", env!("CARGO_BIN_NAME"));

    let options = ServerOptions::from_env()?;

    let controller = PersonController::new(MemoryStore::new());

    #[cfg(feature = "auto-reload")]
    let server = Server::builder_with_auto_reload(options.bind_addr)
        .await?
        .build();

    #[cfg(not(feature = "auto-reload"))]
    let server = Server::builder(tokio::net::TcpListener::bind(options.bind_addr).await?)
        .with_ctrl_c_graceful_shutdown()
        .build();

    server
        .serve(controller.into_router())
        .await
        .map_err(Into::into)
}
