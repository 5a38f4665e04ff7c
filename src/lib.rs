pub mod config;
pub mod middleware;
pub mod routes;

use axum::Router;

use config::{Config, Mode};
use middleware::static_cors::{AllowedOrigins, attach, attach_from_env};

/// The development server: routes from `config`, with static CORS headers unless `mode` is production.
pub fn app(config: &Config, mode: &Mode, allowed_origins: AllowedOrigins) -> Router {
  attach(routes::router(config), mode, allowed_origins)
}

/// [`app`] with the mode from `RAG_ENV` and origins from the config or `CORS_ALLOW_ORIGIN`.
pub fn app_from_env(config: &Config) -> Router {
  attach_from_env(routes::router(config), config.allowed_origins_from_env())
}
