/// Common test utilities and fixtures
use aceplay_core::User;
use aceplay_server::{
    api,
    config::PolicySettings,
    middleware,
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
use std::sync::Arc;

/// Create a test database with migrations applied
pub async fn create_test_database() -> Arc<Database> {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    Arc::new(db)
}

/// Create the full application router against a fresh in-memory database,
/// with the default (unscoped) track policy.
pub async fn create_test_app() -> (Router, Arc<AuthService>, Arc<Database>) {
    create_test_app_with_policy(PolicySettings {
        owner_scoped_list: false,
        owner_scoped_mutations: false,
    })
    .await
}

/// Create the application router with an explicit policy configuration.
pub async fn create_test_app_with_policy(
    policy: PolicySettings,
) -> (Router, Arc<AuthService>, Arc<Database>) {
    let db = create_test_database().await;

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));

    let app_state = AppState::new(
        Arc::clone(&db),
        Arc::clone(&auth_service),
        TrackPolicy::new(&policy),
    );

    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/refresh", post(api::auth::refresh));

    let protected_routes = Router::new()
        .route("/tracks", get(api::tracks::list_tracks))
        .route("/tracks", post(api::tracks::create_track))
        .route("/tracks/:id", patch(api::tracks::update_track))
        .route("/tracks/:id", delete(api::tracks::delete_track))
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
            Arc::clone(&auth_service),
            middleware::auth_middleware,
        ));

    let app = Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(app_state);

    (app, auth_service, db)
}

/// Seed a user and return an access token for them.
pub async fn seed_authenticated_user(
    db: &Database,
    auth_service: &AuthService,
    username: &str,
    password: &str,
) -> (aceplay_core::UserId, String) {
    let password_hash = auth_service.hash_password(password).unwrap();
    let user = db
        .create_user(User::new(username, password_hash).unwrap())
        .await
        .unwrap();
    let user_id = user.id.expect("user id assigned");
    let token = auth_service.create_access_token(user_id).unwrap();
    (user_id, token)
}
