use std::{env, fs};

use axum::{
  body::Body,
  http::{Request, StatusCode, header::ACCESS_CONTROL_ALLOW_ORIGIN},
};
use dev_static_cors::{
  app_from_env,
  config::{ALLOWED_ORIGINS_VAR, Config, MODE_VAR, Mode},
};
use tower::ServiceExt;

async fn allow_origin_for(config: &Config) -> Option<String> {
  let request = Request::builder()
    .uri("/static/logo.png")
    .header("origin", "http://localhost:5173")
    .body(Body::empty())
    .unwrap();
  let response = app_from_env(config).oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  response
    .headers()
    .get(ACCESS_CONTROL_ALLOW_ORIGIN)
    .map(|value| value.to_str().unwrap().to_owned())
}

// Kept as one test: it is the only one in this binary touching the process environment.
#[tokio::test]
async fn mode_is_read_from_environment() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("logo.png"), b"\x89PNG fake").unwrap();
  let config = Config {
    static_dir: dir.path().to_path_buf(),
    ..Config::default()
  };

  unsafe {
    env::remove_var(MODE_VAR);
    env::remove_var(ALLOWED_ORIGINS_VAR);
  }
  assert_eq!(Mode::from_env(), Mode::Production);
  assert_eq!(allow_origin_for(&config).await, None);

  unsafe { env::set_var(MODE_VAR, "production") };
  assert_eq!(Mode::from_env(), Mode::Production);
  assert_eq!(allow_origin_for(&config).await, None);

  unsafe { env::set_var(MODE_VAR, "development") };
  assert_eq!(Mode::from_env(), Mode::Development("development".to_owned()));
  assert_eq!(
    allow_origin_for(&config).await.as_deref(),
    Some("http://localhost:5173")
  );

  unsafe { env::set_var(ALLOWED_ORIGINS_VAR, "http://localhost:3000") };
  assert_eq!(allow_origin_for(&config).await, None);

  unsafe {
    env::remove_var(MODE_VAR);
    env::remove_var(ALLOWED_ORIGINS_VAR);
  }
}
