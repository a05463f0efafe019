//! Server entrypoint.

use brainrot_core::DEFAULT_PORT;
use brainrot_server::{config::Config, serve_router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_cli_args(args: &[String]) -> anyhow::Result<bool> {
    let mut help = false;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => help = true,
            value => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(help)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brainrot=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if parse_cli_args(&args)? {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let state = AppState::new(config.clone());

    let allow_public = brainrot_server::config::env_flag_enabled("ALLOW_PUBLIC_ACCESS");
    if allow_public {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_addr = brainrot_server::resolve_bind_address(&config, allow_public);
    if !bind_addr.ip().is_loopback() {
        tracing::warn!(
            "Binding to non-localhost address: {} - ensure proper security measures are in place",
            bind_addr
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("brainrot running at http://{}", actual_addr);

    serve_router(listener, state, allow_public, shutdown_signal()).await?;

    Ok(())
}

fn print_help() {
    println!("brainrot server\n");
    println!("Usage: brainrot [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!(
        "  PORT              Server port (default: {})",
        DEFAULT_PORT
    );
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin");
    println!(
        "  BIND              Override bind address (e.g. 0.0.0.0:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cli_args;

    #[test]
    fn parse_cli_args_accepts_help_flags() {
        let args = vec!["brainrot".to_string(), "--help".to_string()];
        assert!(parse_cli_args(&args).expect("help should parse"));

        let args = vec!["brainrot".to_string()];
        assert!(!parse_cli_args(&args).expect("no flags should parse"));
    }

    #[test]
    fn parse_cli_args_rejects_unknown_arguments() {
        let cases = [
            vec!["brainrot".to_string(), "--hepl".to_string()],
            vec!["brainrot".to_string(), "serve".to_string()],
        ];

        for args in cases {
            let err = parse_cli_args(&args).expect_err("invalid args should be rejected");
            assert!(err.to_string().contains("Unknown option"));
        }
    }
}
