use axum::{Router, routing::get};

use crate::config::Config;

pub mod root;
pub mod static_files;

pub fn router(config: &Config) -> Router {
  Router::new()
    .route("/", get(root::root_page))
    .nest_service("/static", static_files::service(&config.static_dir))
}
