//! Validator annotation command-line front end
//!
//! Sends one input/output pair to the Validator service and prints the URL
//! of the resulting annotation.

use tracing::{debug, error};
use validator_client::core::config::Config;
use validator_client::core::constants::service;
use validator_client::core::logging::init_logging;
use validator_client::{AnnotationRequest, Annotator, ValidatorClient};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);

    let request = match parse_request(args) {
        Some(request) => request,
        None => {
            eprintln!("Usage: validator-annotate <INPUT_TEXT> <GENERATED_TEXT> [CHECK]...");
            std::process::exit(1);
        }
    };

    let client = match ValidatorClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create {} client: {}", service::NAME, e);
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    debug!("Using {} at {}", client.service_name(), client.base_url());

    match client.annotate(&request).await {
        Ok(url) => println!("{}", url),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Build a request from positional arguments
///
/// The first two arguments are the input and generated texts; any further
/// arguments are checklist items, in order.
fn parse_request(args: Vec<String>) -> Option<AnnotationRequest> {
    let mut args = args.into_iter();
    let input_text = args.next()?;
    let generated_text = args.next()?;
    Some(AnnotationRequest::new(input_text, generated_text).with_checklist(args))
}

/// Print help message
fn print_help() {
    println!("Validator annotation client");
    println!();
    println!("Usage: validator-annotate <INPUT_TEXT> <GENERATED_TEXT> [CHECK]...");
    println!();
    println!("Arguments:");
    println!("  INPUT_TEXT      Text given to the language model");
    println!("  GENERATED_TEXT  Text the model produced");
    println!("  CHECK           Optional checklist items the output should meet");
    println!();
    println!("Options:");
    println!("  -h, --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  VALIDATOR_API_KEY - Your API key (required unless set in the config file)");
    println!("  VALIDATOR_BASE_URL - Service host (default: https://validator.minions.farm)");
    println!("  VALIDATOR_CONFIG_PATH - Optional TOML config file");
    println!("  LOG_LEVEL - Logging level (default: info)");
}
