use tracing::info;

use pariharam_engine::config::EngineConfig;
use pariharam_engine::infra::delivery::spawn_delivery_worker;
use pariharam_engine::infra::memory::MemoryOtpStore;
use pariharam_engine::infra::smtp::SmtpMailer;
use pariharam_engine::router::build_router;
use pariharam_engine::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::from_env();

    let mailer =
        SmtpMailer::from_credentials(config.smtp_email.clone(), config.smtp_password.clone())
            .expect("failed to build SMTP mailer");
    let delivery = spawn_delivery_worker(mailer);

    let state = AppState {
        otp_store: MemoryOtpStore::new(),
        delivery,
        api_secret: config.api_secret.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("astrology engine listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
