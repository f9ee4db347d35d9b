pub mod password;
pub mod routes;
pub mod store;
pub mod telemetry;
pub mod time;

use std::net::TcpListener;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_identity::IdentityMiddleware;
use actix_session::{
    SessionMiddleware, config::BrowserSession, storage::CookieSessionStore,
};
use actix_web::cookie::{Key, time::Duration};
use actix_web::dev::{Server, ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, web};
use payloads::availability::AvailabilityPolicy;
use payloads::catalog::ServiceCatalog;
use secrecy::SecretBox;
use sqlx::PgPool;

use crate::time::TimeSource;

/// Image uploads arrive as JSON arrays of numbers, up to four characters per
/// byte.
const JSON_LIMIT: usize = payloads::MAX_IMAGE_SIZE * 4 + 64 * 1024;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub async fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> std::io::Result<Server> {
    let secret_key = Key::generate(); // key for signing session cookies
    let db_pool = web::Data::new(
        PgPool::connect(&config.database_url)
            .await
            .map_err(std::io::Error::other)?,
    );
    let time_source = web::Data::new(time_source);
    let catalog = web::Data::new(ServiceCatalog::standard());
    let policy = web::Data::new(AvailabilityPolicy::standard());

    let allowed_origins = config.allowed_origins.clone();
    let static_dir = config.static_dir.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let app = App::new()
            .wrap(cors)
            // Use signed cookie to track user id
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(
                    CookieSessionStore::default(),
                    secret_key.clone(),
                )
                .cookie_name("umpark".into())
                .session_lifecycle(
                    BrowserSession::default().state_ttl(Duration::days(30)),
                )
                .build(),
            )
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT))
            .service(routes::api_services())
            .app_data(db_pool.clone())
            .app_data(time_source.clone())
            .app_data(catalog.clone())
            .app_data(policy.clone());

        match &static_dir {
            Some(dir) => app.service(spa_files(dir.clone())),
            None => app,
        }
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Serve the built UI. Unknown paths fall back to `index.html` so client-side
/// routes such as `/cenik` survive a reload.
fn spa_files(dir: PathBuf) -> Files {
    let index = dir.join("index.html");
    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(index).await?;
                let res = file.into_response(&req);
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}

/// Credentials for an account that is guaranteed to be an admin on startup.
pub struct AdminBootstrap {
    pub email: String,
    pub password: SecretBox<String>,
}

pub struct Config {
    pub database_url: String,
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Directory with the built UI, served at `/` when set.
    pub static_dir: Option<PathBuf>,
    pub admin: Option<AdminBootstrap>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("ADMIN_EMAIL and ADMIN_PASSWORD must be set together")]
    IncompleteAdmin,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        use std::env::var;

        let required =
            |name: &'static str| var(name).map_err(|_| ConfigError::Missing(name));

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let port = required("PORT")?;
        let port = port.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port,
        })?;

        let admin = match (var("ADMIN_EMAIL").ok(), var("ADMIN_PASSWORD").ok())
        {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password: SecretBox::new(Box::new(password)),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteAdmin),
        };

        Ok(Config {
            database_url: required("DATABASE_URL")?,
            ip: required("IP_ADDRESS")?,
            port,
            allowed_origins,
            static_dir: var("STATIC_DIR").ok().map(PathBuf::from),
            admin,
        })
    }
}
