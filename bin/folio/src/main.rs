//! folio - portfolio backend and terminal easter egg
//!
//! `folio serve` runs the HTTP server with the contact relay;
//! `folio terminal` runs the easter-egg terminal on stdin/stdout.

mod repl;

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use tracing::{debug, error, info};

use folio::{handle_startup_error, load_config, server, Config};

/// What to run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Mode {
    #[default]
    Serve,
    Terminal,
}

/// Application configuration from the command line
#[derive(Debug, Default)]
struct AppArgs {
    mode: Mode,
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Listen port override
    port: Option<u16>,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "serve" => app_args.mode = Mode::Serve,
                "terminal" => app_args.mode = Mode::Terminal,
                "--config" | "-c" => {
                    let path = args.next().context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--port" | "-p" => {
                    let port = args.next().context("Missing port number")?;
                    app_args.port = Some(
                        port.parse()
                            .with_context(|| format!("Invalid port: {}", port))?,
                    );
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("{} v{}", folio::NAME, folio::VERSION);
                    process::exit(0);
                }
                other => anyhow::bail!("Unknown argument: {}", other),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("{} - {}", folio::NAME, folio::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    folio [serve|terminal] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Run the HTTP server (default)");
    println!("    terminal    Run the easter-egg terminal on stdin/stdout");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -p, --port <PORT>      Listen port (overrides PORT)");
    println!("    -d, --debug            Enable debug logging");
    println!("    -h, --help             Print this help message");
    println!("    -V, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    folio looks for configuration files in the following order:");
    println!("    1. Path specified with --config or FOLIO_CONFIG");
    println!("    2. ./folio.toml or ./folio.json");
    println!("    3. <config dir>/folio/config.toml");
    println!("    4. ~/.folio.toml");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT                   Listen port (default 5000)");
    println!("    SENDGRID_API_KEY       Mail provider API key");
    println!("    FOLIO_CONFIG           Path to configuration file");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn init_tracing(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn configure(args: &AppArgs) -> folio::Result<Config> {
    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(port) = args.port {
        debug!("Applying port override: {}", port);
        config.server.port = port;
        folio::config::loader::validate_config(&config)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {:#}", e);
        print_help();
        process::exit(2);
    });

    init_tracing(args.debug);
    debug!("Parsed arguments: {:?}", args);

    let config = configure(&args).unwrap_or_else(|e| {
        error!("{}", e);
        eprintln!("{}", handle_startup_error(&e));
        process::exit(1);
    });

    match args.mode {
        Mode::Serve => {
            if let Err(e) = server::serve(&config).await {
                error!("{}", e);
                eprintln!("{}", handle_startup_error(&e));
                process::exit(1);
            }
        }
        Mode::Terminal => {
            repl::run(&config.terminal).await?;
        }
    }

    info!("{} shutdown complete", folio::NAME);
    Ok(())
}
