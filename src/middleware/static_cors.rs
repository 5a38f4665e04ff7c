use std::{collections::HashSet, sync::Arc};

use axum::{
  Router,
  extract::{OriginalUri, Request, State},
  http::{
    HeaderMap, HeaderValue,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY},
  },
  middleware::{self, Next},
  response::Response,
};
use tracing::info;

use crate::config::Mode;

pub const STATIC_PREFIX: &str = "/static/";
pub const WILDCARD: &str = "*";

/// Origins the filter will echo back. Fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
  Any,
  List(HashSet<String>),
}

impl AllowedOrigins {
  pub fn new<I, S>(origins: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    origins.into_iter().collect()
  }

  /// Exact string comparison, no normalization of scheme, host or port.
  pub fn permits(&self, origin: &str) -> bool {
    match self {
      AllowedOrigins::Any => true,
      AllowedOrigins::List(origins) => origins.contains(origin),
    }
  }
}

impl<S: Into<String>> FromIterator<S> for AllowedOrigins {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let origins: HashSet<String> = iter.into_iter().map(Into::into).collect();
    if origins.contains(WILDCARD) {
      AllowedOrigins::Any
    } else {
      AllowedOrigins::List(origins)
    }
  }
}

/// Adds `Access-Control-Allow-Origin` and `Vary` to a `/static/` response when
/// the request origin is allowed. Any other input leaves `headers` untouched.
pub fn decorate(
  allowed: &AllowedOrigins,
  path: &str,
  origin: Option<&HeaderValue>,
  headers: &mut HeaderMap,
) {
  if !path.starts_with(STATIC_PREFIX) {
    return;
  }
  let Some(origin) = origin else {
    return;
  };
  let Ok(origin_str) = origin.to_str() else {
    return;
  };
  if origin_str.is_empty() {
    return;
  }

  if allowed.permits(origin_str) {
    // the request's own origin, never `*`, so credentialed requests still work
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    headers.insert(VARY, HeaderValue::from_static("Origin"));
  }
}

pub async fn static_cors(
  State(allowed): State<Arc<AllowedOrigins>>,
  request: Request,
  next: Next,
) -> Response {
  let path = request
    .extensions()
    .get::<OriginalUri>()
    .map(|OriginalUri(uri)| uri.path().to_owned())
    .unwrap_or_else(|| request.uri().path().to_owned());
  let origin = request.headers().get(ORIGIN).cloned();

  let mut response = next.run(request).await;
  decorate(&allowed, &path, origin.as_ref(), response.headers_mut());
  response
}

/// Layers [`static_cors`] onto `router` unless running in production.
pub fn attach<S>(router: Router<S>, mode: &Mode, allowed_origins: AllowedOrigins) -> Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  if mode.is_production() {
    info!("production mode, static CORS headers disabled");
    return router;
  }

  info!(mode = %mode, origins = ?allowed_origins, "attaching static CORS headers");
  router.layer(middleware::from_fn_with_state(
    Arc::new(allowed_origins),
    static_cors,
  ))
}

/// Same as [`attach`], reading the mode from `RAG_ENV` once.
pub fn attach_from_env<S>(router: Router<S>, allowed_origins: AllowedOrigins) -> Router<S>
where
  S: Clone + Send + Sync + 'static,
{
  attach(router, &Mode::from_env(), allowed_origins)
}
