mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::about::{routes as about_routes, AboutService};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::designs::{routes as designs_routes, DesignService};
use crate::features::phones::{routes as phones_routes, PhoneService};
use crate::features::search::{routes as search_routes, SearchService};
use crate::features::videos::{routes as videos_routes, VideoService};
use crate::modules::storage::{S3ObjectStore, UploadStore};
use crate::shared::constants::{CATEGORY_DESIGNS, CATEGORY_PHONES, CATEGORY_VIDEOS};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    if config.auth.is_dev_secret() {
        tracing::warn!("SESSION_SECRET is the development default; set a real one");
    }

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Ensure the local upload tree exists; it is also the fallback target
    // when remote storage fails
    for category in [CATEGORY_PHONES, CATEGORY_DESIGNS, CATEGORY_VIDEOS] {
        std::fs::create_dir_all(config.storage.local_root.join(category))?;
    }

    // Initialize the storage selector: remote object store when configured,
    // local tree otherwise
    let upload_store = match config.storage.remote.clone() {
        Some(remote_config) => {
            let store = S3ObjectStore::new(remote_config)
                .map_err(|e| anyhow::anyhow!("Failed to initialize object store: {}", e))?;
            store
                .ensure_bucket_exists()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to ensure bucket exists: {}", e))?;
            store.apply_public_read_policy().await;
            tracing::info!("Remote storage enabled for bucket: {}", store.bucket_name());

            Arc::new(UploadStore::with_remote(
                config.storage.local_root.clone(),
                Arc::new(store),
            ))
        }
        None => {
            tracing::info!(
                "Local storage enabled under {}",
                config.storage.local_root.display()
            );
            Arc::new(UploadStore::local(config.storage.local_root.clone()))
        }
    };

    // Initialize auth services and seed the default admin credential
    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(pool.clone(), Arc::clone(&token_service)));
    auth_service.ensure_default_admin().await?;
    tracing::info!("Auth service initialized");

    // Initialize catalog services
    let phone_service = Arc::new(PhoneService::new(pool.clone(), Arc::clone(&upload_store)));
    let design_service = Arc::new(DesignService::new(pool.clone(), Arc::clone(&upload_store)));
    let video_service = Arc::new(VideoService::new(pool.clone(), Arc::clone(&upload_store)));
    let about_service = Arc::new(AboutService::new(pool.clone(), Arc::clone(&upload_store)));
    let search_service = Arc::new(SearchService::new(
        Arc::clone(&phone_service),
        Arc::clone(&design_service),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&phone_service),
        Arc::clone(&design_service),
        Arc::clone(&video_service),
    ));
    tracing::info!("Catalog services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    // Protected routes (require a valid session token)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(phones_routes::admin_routes(Arc::clone(&phone_service)))
        .merge(designs_routes::admin_routes(Arc::clone(&design_service)))
        .merge(videos_routes::admin_routes(Arc::clone(&video_service)))
        .merge(about_routes::admin_routes(Arc::clone(&about_service)))
        .merge(dashboard_routes::admin_routes(dashboard_service))
        .layer(DefaultBodyLimit::max(config.app.max_upload_size))
        .route_layer(axum::middleware::from_fn_with_state(
            token_service.clone(),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(phones_routes::routes(phone_service))
        .merge(designs_routes::routes(design_service))
        .merge(videos_routes::routes(video_service))
        .merge(about_routes::routes(about_service))
        .merge(search_routes::routes(search_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        // Locally stored uploads are served by relative path; remote
        // references are complete URLs and never reach this route
        .nest_service("/uploads", ServeDir::new(&config.storage.local_root))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
