use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl: Duration,
}

/// Storage configuration: local upload root plus the optional remote
/// object-store settings selected by `USE_S3`.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub local_root: PathBuf,
    pub remote: Option<RemoteStorageConfig>,
}

#[derive(Debug, Clone)]
pub struct RemoteStorageConfig {
    /// Bucket name, required whenever remote mode is enabled
    pub bucket: String,
    /// AWS region (for S3 compatibility)
    pub region: String,
    /// Custom endpoint for S3-compatible servers (MinIO etc.); AWS when unset
    pub endpoint: Option<String>,
    /// Endpoint used when building public URLs (defaults to `endpoint`)
    pub public_endpoint: Option<String>,
    /// Access key; falls back to the ambient credential chain when unset
    pub access_key: Option<String>,
    /// Secret key; falls back to the ambient credential chain when unset
    pub secret_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_UPLOAD_SIZE: usize = 50 * 1024 * 1024; // 50MB, videos included

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size = env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_UPLOAD_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_UPLOAD_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_upload_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/portfolio.db?mode=rwc".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            acquire_timeout_secs,
        })
    }
}

impl AuthConfig {
    const DEFAULT_SESSION_TTL_SECS: u64 = 86_400; // 24 hours
    pub const DEV_SESSION_SECRET: &'static str = "dev-secret-change-this";

    pub fn from_env() -> Result<Self, String> {
        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| Self::DEV_SESSION_SECRET.to_string());

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_SESSION_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SESSION_TTL_SECS must be a valid number".to_string())?;

        Ok(Self {
            session_secret,
            session_ttl: Duration::from_secs(session_ttl_secs),
        })
    }

    pub fn is_dev_secret(&self) -> bool {
        self.session_secret == Self::DEV_SESSION_SECRET
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let local_root = PathBuf::from(
            env::var("UPLOAD_ROOT").unwrap_or_else(|_| "static/uploads".to_string()),
        );

        let use_remote = env::var("USE_S3")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let remote = if use_remote {
            // Remote mode fails fast when the bucket name is unset
            let bucket = env::var("AWS_S3_BUCKET")
                .ok()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| "USE_S3 is set but AWS_S3_BUCKET is not provided".to_string())?;

            let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
            let endpoint = env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty());
            let public_endpoint = env::var("S3_PUBLIC_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .or_else(|| endpoint.clone());
            let access_key = env::var("AWS_ACCESS_KEY_ID").ok().filter(|s| !s.is_empty());
            let secret_key = env::var("AWS_SECRET_ACCESS_KEY")
                .ok()
                .filter(|s| !s.is_empty());

            Some(RemoteStorageConfig {
                bucket,
                region,
                endpoint,
                public_endpoint,
                access_key,
                secret_key,
            })
        } else {
            None
        };

        Ok(Self { local_root, remote })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Portfolio API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Portfolio catalog and upload API".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}
