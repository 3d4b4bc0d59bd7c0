use service_bootstrap::config::{AppConfig, LogConfig};
use std::process::ExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(log: &LogConfig) {
    let level = match log.log_level() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let dev = log.dev_log_mode();
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(dev)
        .with_file(dev)
        .with_line_number(dev);

    if dev {
        builder.init();
    } else {
        builder.compact().init();
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Config loading logs go to a temporary subscriber until the configured one is installed.
    let bootstrap = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    let config = match tracing::subscriber::with_default(bootstrap, AppConfig::from_env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log);

    info!(
        mode = ?config.http.mode(),
        port = config.http.port,
        "Configuration ready"
    );
    debug!(
        driver = %config.database.driver,
        address = %config.database.address,
        database = %config.database.database_name,
        max_open_conns = config.database.max_open_conns(),
        max_idle_conns = config.database.max_idle_conns(),
        conn_max_lifetime = ?config.database.conn_max_lifetime(),
        log_file = %config.log.filename,
        "Configuration details"
    );

    println!("try git ci-cd");
    ExitCode::SUCCESS
}
