use clap::Parser;
use log::error;
use std::process::ExitCode;
use std::time::Duration;

use gyro_osc::{AppConfig, Args};

/// Time given to background tasks once the forwarder is done
const SHUTDOWN_TIMEOUT_MS: u64 = 200;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match AppConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Can't start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(gyro_osc::run(config));
    // the stdin reader may still be parked in a blocking read
    runtime.shutdown_timeout(Duration::from_millis(SHUTDOWN_TIMEOUT_MS));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
