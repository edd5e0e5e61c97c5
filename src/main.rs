use stow_session::handler;
use stow_session::model::config::SessionConfig;
use stow_session::model::service;
use stow_session::sign::hmac::HmacSigner;
use stow_session::utils::secret_str::SecretString;
use stow_session::{shutdown_signal, Signer};

use axum::http::HeaderName;
use axum_server::tls_rustls::RustlsConfig;
use humantime::format_duration;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use axum::{
    routing::{get, post},
    Router,
};
use stow_session::tls::cert::generate_certificates;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Session cookie configuration service
#[derive(Parser, Debug)]
#[command(version, name = "stow-session", about, long_about = None)]
struct Args {
    /// Server port
    #[arg(long, env, default_value = "8000")]
    port: u16,
    /// Session validity period
    #[arg(long, env, default_value = "6h", value_parser = humantime::parse_duration)]
    session_timeout: Duration,
    /// Name of the browser cookie carrying the session payload
    #[arg(long, env, default_value = "_rails-stow_session")]
    session_key: String,
    /// Cookie signing secret, at least 30 random characters
    #[arg(long, env, default_value = "")]
    session_secret: String,
    /// host for certificate generation
    #[arg(long, env, default_value = "localhost")]
    host: String,
    /// Print a freshly generated signing secret and exit
    #[arg(long)]
    generate_secret: bool,
}

async fn main_int(args: Args) -> anyhow::Result<()> {
    log::info!("Starting stow-session");
    tracing::info!(port = args.port, "cfg");
    tracing::info!(session_key = args.session_key, "cfg");
    tracing::info!(
        session_timeout = format_duration(args.session_timeout).to_string(),
        "cfg"
    );

    let secret: SecretString = args.session_secret.as_str().into();
    let config = SessionConfig::load(
        &args.session_key,
        secret,
        args.session_timeout.as_millis() as i64,
    )?;
    let signer: Box<dyn Signer + Send + Sync> = Box::new(HmacSigner::new(&config.secret)?);

    let service_data = service::Data { config, signer };
    let quarded_data = Arc::new(service_data);

    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_origin(Any)
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let app = Router::new()
        .route("/session/live", get(handler::live::handler))
        .route("/session/issue", post(handler::issue::handler))
        .route("/session/validate", get(handler::validate::handler))
        .route("/session/clear", post(handler::clear::handler))
        .with_state(quarded_data)
        .layer((
            TraceLayer::new_for_http(),
            TimeoutLayer::new(Duration::from_secs(15)),
            cors,
        ));

    let (cert, key_pair) = generate_certificates(&args.host)?;
    tracing::trace!("Configuring Rustls");
    let cfg = RustlsConfig::from_der(vec![cert.der().to_vec()], key_pair.serialize_der()).await?;
    tracing::debug!(port = args.port, "starting https");
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let handle = axum_server::Handle::new();
    let shutdown_future = shutdown_signal_handle(handle.clone());
    tokio::spawn(shutdown_future);

    tracing::info!(addr = format!("{}", addr), "listening");
    axum_server::bind_rustls(addr, cfg)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Bye");
    Ok(())
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();
    let args = Args::parse();
    if args.generate_secret {
        println!("{}", SecretString::generate().reveal_secret());
        return Ok(());
    }
    if let Err(e) = main_int(args).await {
        log::error!("{}", e);
        return Err(e);
    }
    Ok(())
}

async fn shutdown_signal_handle(handle: axum_server::Handle) {
    shutdown_signal().await;
    tracing::trace!("Received termination signal shutting down");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
