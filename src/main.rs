use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pitchside::{serve, Commands, Container, ContainerConfig, API_KEY_VAR};

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from a canned mock instead of calling the completion API
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig::from_env(cli.mock_llm);
    let container = Arc::new(Container::new(config)?);

    match cli.command {
        Commands::Serve { host, port, local } => {
            if !container.credential_configured() {
                warn!("{API_KEY_VAR} environment variable is not set!");
                warn!("Set it before chatting: export {API_KEY_VAR}='your_api_key_here'");
                warn!("or create a .env file with: {API_KEY_VAR}=your_api_key_here");
            }

            let host = if local { "127.0.0.1" } else { host.as_str() };
            let addr = listen_addr(host, port);

            info!("Starting Soccer AI Assistant");
            info!(
                "Powered by {} ({})",
                container.provider_name(),
                container.model()
            );

            serve(container, &addr).await?;
        }

        Commands::Ask { message } => {
            let reply = container.relay_chat_use_case().execute(&message).await?;
            println!("{reply}");
        }
    }

    Ok(())
}

/// `host:port`, bracketing bare IPv6 literals.
fn listen_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_defaults_to_all_interfaces_on_8000() {
        let cli = Cli::try_parse_from(["pitchside", "serve"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Serve {
                host: "0.0.0.0".to_string(),
                port: 8000,
                local: false,
            }
        );
        assert!(!cli.mock_llm);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pitchside", "serve", "--port", "9000", "--local", "--mock-llm", "-v"])
                .unwrap();
        assert!(cli.mock_llm);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { port: 9000, local: true, .. }));
    }

    #[test]
    fn ask_requires_message() {
        assert!(Cli::try_parse_from(["pitchside", "ask"]).is_err());
        let cli = Cli::try_parse_from(["pitchside", "ask", "Who won Euro 2016?"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Ask {
                message: "Who won Euro 2016?".to_string()
            }
        );
    }

    #[test]
    fn listen_addr_brackets_ipv6() {
        assert_eq!(listen_addr("0.0.0.0", 8000), "0.0.0.0:8000");
        assert_eq!(listen_addr("localhost", 8000), "localhost:8000");
        assert_eq!(listen_addr("::1", 8000), "[::1]:8000");
        assert_eq!(listen_addr("[::1]", 8000), "[::1]:8000");
    }
}
