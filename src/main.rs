//! CipherSphere command-line entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ciphersphere::CipherOutcome;
use ciphersphere::cli::{self, Cli, Commands, output};
use ciphersphere::config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_env("CIPHERSPHERE_LOG").unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("ciphersphere=debug")
        } else {
            EnvFilter::new("ciphersphere=warn")
        }
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let config = AppConfig::load(args.config.as_deref());
    let json = args.json || config.as_ref().is_ok_and(|c| c.output.json);

    let result = match &args.command {
        Commands::Encrypt(t) => config
            .and_then(|c| cli::commands::encrypt::execute(t, &c, args.quiet)),
        Commands::Decrypt(t) => config
            .and_then(|c| cli::commands::decrypt::execute(t, &c, args.quiet)),
        Commands::Apply { request } => {
            let outcome = cli::commands::apply::execute(request.as_deref());
            output::json(&outcome);
            exit_on_failure(outcome.is_success());
            return;
        }
        Commands::Methods => {
            cli::commands::methods::execute(json);
            return;
        }
    };

    if json {
        let outcome = CipherOutcome::from(result);
        output::json(&outcome);
        exit_on_failure(outcome.is_success());
        return;
    }

    match result {
        Ok(text) => output::result(&text),
        Err(e) => {
            output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}

fn exit_on_failure(success: bool) {
    if !success {
        std::process::exit(1);
    }
}
