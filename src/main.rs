use std::process::ExitCode;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use seedwatch::cli::cli::run;
use seedwatch::common::common::setup_logging;
use seedwatch::common::enums::error_code::ErrorCode;
use seedwatch::config::structs::configuration::Configuration;
use seedwatch::structs::Cli;

fn main() -> ExitCode
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ErrorCode::ConfBad.into();
        }
    };

    if let Err(e) = setup_logging(&config, args.verbose) {
        eprintln!("[ERROR] {}", e);
        return ErrorCode::ConfBad.into();
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    let runtime = match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("[BOOT] Could not start the runtime: {}", e);
            return ErrorCode::ProcFail.into();
        }
    };

    let code = runtime.block_on(run(&args, &config));
    if code != ErrorCode::Ok {
        info!("[BOOT] Exiting: {} ({})", code, code.code());
    }
    code.into()
}
