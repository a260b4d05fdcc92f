use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resume::{
    config::{Config, LogFormat},
    graphql::ResumeSchemas,
    handler::{handle_auth_check, handle_event},
    server::create_app,
    storage::build_repository,
};

/// Resume - GraphQL backend for per-user resume items
#[derive(Parser, Debug)]
#[command(name = "resume")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Defaults to `lambda` so the binary can serve as a Lambda bootstrap
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run as an AWS Lambda function
    Lambda {
        /// Handler to run
        #[arg(long, value_enum, default_value_t = Function::Graphql)]
        function: Function,
    },
    /// Run the local development server
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,

        /// Store items in memory instead of DynamoDB
        #[arg(long)]
        in_memory: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Function {
    /// The GraphQL endpoint
    Graphql,
    /// The authorizer smoke test
    AuthCheck,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    let command = cli.command.unwrap_or(Command::Lambda {
        function: Function::Graphql,
    });

    match command {
        Command::Lambda { function } => run_lambda(function, &config).await,
        Command::Serve {
            host,
            port,
            in_memory,
        } => run_server(&config, &host, port, in_memory).await,
    }
}

/// Initialize the tracing subscriber in the configured format.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "resume=info,resume_core=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// Run the selected handler under the Lambda runtime.
///
/// The repository and schemas are built once, before the first invocation.
async fn run_lambda(function: Function, config: &Config) -> Result<()> {
    tracing::info!(?function, "Starting Lambda runtime");

    let result = match function {
        Function::Graphql => {
            let schemas = ResumeSchemas::new(build_repository(config, false).await?);
            lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
                let schemas = schemas.clone();
                async move {
                    handle_event(&schemas, event.payload)
                        .await
                        .map_err(lambda_runtime::Error::from)
                }
            }))
            .await
        }
        Function::AuthCheck => {
            lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| async move {
                handle_auth_check(event.payload).map_err(lambda_runtime::Error::from)
            }))
            .await
        }
    };

    result.map_err(|e| anyhow::anyhow!(e))
}

/// Run the development server until Ctrl+C or SIGTERM.
async fn run_server(config: &Config, host: &str, port: u16, in_memory: bool) -> Result<()> {
    let schemas = ResumeSchemas::new(build_repository(config, in_memory).await?);
    let app = create_app(schemas);

    let listener = TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
