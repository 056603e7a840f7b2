use std::process::ExitCode;

use bulkgate_sender::{
    config::Config, domain::errors::ConnectorError,
    infrastructure::configuration::ConnectorConfig, presentation::job,
};
use tokio::main;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let connector = ConnectorConfig::load(&config.config_path());
    init_tracing(connector.as_ref().is_ok_and(ConnectorConfig::debug));

    let result = match connector {
        Ok(connector) => job::run(&config, connector).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &ConnectorError) -> u8 {
    if err.is_user_error() { 1 } else { 2 }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
