use clap::Parser;
use fetch_outcome::utils::logger;
use fetch_outcome::{CliArgs, DomainError, HttpTransport, ResponseAdapter, SingleFireGate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting fetch-outcome CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let (config, request) = match args.client_config().and_then(|c| Ok((c, args.request()?))) {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let adapter = ResponseAdapter::new(HttpTransport::new(&config)?);
    let gate: SingleFireGate<serde_json::Value> = SingleFireGate::new();
    gate.activate(|| adapter.call(request)).await;

    let outcome = gate.current();
    let exit_code = outcome.fold(
        |data| {
            tracing::info!("✅ Request succeeded");
            match serde_json::to_string_pretty(&data) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{}", data),
            }
            0
        },
        |error| {
            tracing::error!("❌ Request failed: {}", error);
            eprintln!("❌ {}", error);
            match error {
                DomainError::NotFound(_) | DomainError::PaymentRequired(_) => 2,
                DomainError::Generic(_) => 1,
            }
        },
        || {
            tracing::error!("❌ Request never settled");
            1
        },
    );

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
