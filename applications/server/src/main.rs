/// Aceplay Server - authenticated media-catalog REST API
use aceplay_server::{
    api, middleware,
    config::ServerConfig,
    policy::TrackPolicy,
    services::AuthService,
    state::AppState,
};
use aceplay_storage::Database;
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aceplay-server")]
#[command(about = "Aceplay media-catalog server", long_about = None)]
struct Cli {
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
                .unwrap_or_else(|_| "aceplay_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::AddUser { username, password } => add_user(&username, &password).await?,
        Commands::ListUsers => list_users().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let db = Arc::new(Database::new(&config.storage.database_url).await?);

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));

    let policy = TrackPolicy::new(&config.policy);
    let app_state = AppState::new(db, Arc::clone(&auth_service), policy);
    let app = create_router(app_state, auth_service);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState, auth_service: Arc<AuthService>) -> Router {
    // Public routes (no authentication)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh));

    // Protected routes: the auth layer rejects before any handler sees the
    // request, so existence is never leaked to unauthenticated callers
    let protected_routes = Router::new()
        // Tracks
        .route("/tracks", get(api::tracks::list_tracks))
        .route("/tracks", post(api::tracks::create_track))
        .route("/tracks/:id", patch(api::tracks::update_track))
        .route("/tracks/:id", delete(api::tracks::delete_track))
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/first", get(api::playlists::first_playlist))
        .route("/playlists/:id", get(api::playlists::get_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route(
            "/playlists/:id/tracks",
            post(api::playlists::add_track_to_playlist),
        )
        .route(
            "/playlists/:id/tracks/:track_id",
            delete(api::playlists::remove_track_from_playlist),
        )
        .layer(axum_middleware::from_fn_with_state(
            auth_service,
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn add_user(username: &str, password: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let db = Database::new(&config.storage.database_url).await?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );

    let password_hash = auth_service.hash_password(password)?;
    let user = db
        .create_user(aceplay_core::User::new(username, password_hash)?)
        .await?;

    println!("Created user {} (id {})", user.username, user.id.unwrap_or_default());

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let db = Database::new(&config.storage.database_url).await?;

    let users = db.get_all_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id.unwrap_or_default(), user.username);
    }

    Ok(())
}
