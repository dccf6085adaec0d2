mod broker;
mod convert;
mod proto;
mod rpc;
mod store_backend;
mod tls;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tokio_rustls::TlsAcceptor;
use tonic::transport::Server;

use bezosphere_core::config::Config;
use bezosphere_core::dispatch::aws::AwsDispatcher;
use bezosphere_core::pipeline::Pipeline;
use bezosphere_core::store::{NoopStore, PostgresStore};

use broker::SpanxCredentialBroker;
use proto::gateway::bezosphere_server::BezosphereServer;
use rpc::GatewayService;
use store_backend::StoreBackend;
use tls::{accept_loop, load_server_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let store = if let Some(conn) = &config.postgres_conn {
        tracing::info!("connecting to response-cache database");
        StoreBackend::Postgres(PostgresStore::connect(conn).await?)
    } else {
        tracing::warn!("no POSTGRES_CONN configured, running in credentialing-only mode");
        StoreBackend::Noop(NoopStore)
    };

    tracing::info!(address = %config.spanx_address, "connecting to credential broker");
    let broker = SpanxCredentialBroker::connect(config.spanx_address.clone()).await?;

    let dispatcher = AwsDispatcher::new();

    let pipeline = Pipeline::new(store, broker, dispatcher);
    let service = GatewayService::new(pipeline);

    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<BezosphereServer<GatewayService<StoreBackend, SpanxCredentialBroker, AwsDispatcher>>>()
        .await;

    let tls_config = load_server_config(&config.cert, &config.cert_key)?;
    let acceptor = TlsAcceptor::from(tls_config);

    let addr: SocketAddr = config.address.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gateway listening");

    let incoming = accept_loop(listener, acceptor);

    Server::builder()
        .add_service(health_service)
        .add_service(BezosphereServer::new(service))
        .serve_with_incoming_shutdown(incoming, shutdown_signal())
        .await?;

    tracing::info!("gateway shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}
