pub mod model;
pub mod sign;

use tokio::signal;

pub mod handler;
pub mod tls;
pub mod utils;

// Define a trait for the cookie signing routine
pub trait Signer {
    fn sign(&self, data: &str) -> String;
    fn verify(&self, value: &str) -> Result<String, model::sign::Error>;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Ctrl-C received, shutting down");
        },
        _ = terminate => {
            log::info!("SIGTERM received, shutting down");
        },
    }
}
