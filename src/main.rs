//! SmartGuide demo driver
//!
//! Logs in with demo credentials and runs the simulated device until
//! Ctrl+C. Reads configuration from TOML (~/.config/smartguide/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use smartguide::application::auth::{AuthGate, LoginForm, LoginOutcome};
use smartguide::application::simulation::{DeviceActions, SimulationClock};
use smartguide::domain::{str_to_role, DemoCredentials};
use smartguide::notifications::ConsoleSink;
use smartguide::shared::{listen_for_ctrl_c, ShutdownSignal};
use smartguide::{default_config_path, AppConfig, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("SMARTGUIDE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting SmartGuide demo...");

    // ── Wire the core ──────────────────────────────────────────
    let store = Arc::new(SessionStore::in_memory());
    let sink = Arc::new(ConsoleSink::new());
    let gate = AuthGate::new(
        Arc::new(DemoCredentials::new()),
        store.clone(),
        sink.clone(),
        app_cfg.auth.clone(),
    );

    // Demo credentials: admin/admin123 or user/user123
    let mut args = std::env::args().skip(1);
    let role = str_to_role(&args.next().unwrap_or_else(|| "user".into()));
    let username = args.next().unwrap_or_else(|| "user".into());
    let password = args.next().unwrap_or_else(|| "user123".into());
    let remember = args.next().as_deref() == Some("--remember");

    // ── Login ──────────────────────────────────────────────────
    let outcome = gate
        .submit(LoginForm {
            role,
            username,
            password,
            remember,
        })
        .await;

    let record = match outcome {
        LoginOutcome::Authenticated { record, redirect } => {
            info!("Redirecting to {:?}", redirect);
            record
        }
        LoginOutcome::Rejected(reason) => {
            error!("Login failed: {}", reason);
            return Ok(());
        }
        LoginOutcome::Ignored => return Ok(()),
    };

    info!(
        "Dashboard ready for {} ({})",
        record.display_name,
        record.role.as_str()
    );

    // ── Run the device simulation until Ctrl+C ─────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_ctrl_c(shutdown.clone()));

    let clock = Arc::new(SimulationClock::new(
        sink.clone(),
        app_cfg.simulation.clone(),
    ));
    clock.start(shutdown.clone());

    let actions = DeviceActions::new(sink.clone(), clock.clone());
    actions.test_voice().await;

    shutdown.notified().wait().await;

    // ── Teardown ───────────────────────────────────────────────
    gate.logout().await;
    info!("Walked {:.2} km this session", clock.distance_km().await);
    // let background tasks observe the signal before exit
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    Ok(())
}
