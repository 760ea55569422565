/// TechNotes Server - user account service
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use technotes_server::{
    api,
    config::ServerConfig,
    services::CreateUserRequest,
    state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "technotes-server")]
#[command(about = "TechNotes user account server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role label (repeatable)
        #[arg(short, long = "role", default_values_t = vec!["Employee".to_string()])]
        roles: Vec<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "technotes_server=info,technotes_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            username,
            password,
            roles,
        } => {
            add_user(config, username, password, roles).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting TechNotes server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app = api::router(AppState::open(&config).await?);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: ServerConfig,
    username: String,
    password: String,
    roles: Vec<String>,
) -> anyhow::Result<()> {
    let state = AppState::open(&config).await?;

    let message = state
        .accounts
        .create(CreateUserRequest {
            username: Some(username),
            password: Some(password),
            roles: Some(roles),
        })
        .await?;

    println!("{}", message);
    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::open(&config).await?;

    let users = state.accounts.list().await?;

    println!("Users:");
    for user in users {
        let status = if user.active { "active" } else { "inactive" };
        println!(
            "  {} - {} [{}] ({})",
            user.id,
            user.username,
            user.roles.join(", "),
            status
        );
    }

    Ok(())
}
