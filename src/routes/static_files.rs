use std::path::Path;

use tower_http::services::ServeDir;
use tracing::warn;

pub fn service(static_dir: &Path) -> ServeDir {
  if !static_dir.is_dir() {
    warn!(path = %static_dir.display(), "static directory not found, /static/ will 404");
  }

  ServeDir::new(static_dir)
}
