use {
  super::*,
  tokio::net::TcpListener,
  tower_http::trace::TraceLayer,
};

#[derive(Clone)]
pub(crate) struct AppState {
  pub(crate) client: Client,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeRequest {
  pub(crate) url: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrapeResponse {
  #[serde(flatten)]
  pub(crate) thread: Thread,
  pub(crate) success: bool,
}

#[derive(Debug)]
pub(crate) struct ApiError(Error);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let Self(error) = self;

    let status = if error.is_client_error() {
      StatusCode::BAD_REQUEST
    } else {
      StatusCode::BAD_GATEWAY
    };

    let kind = error.kind();

    if status.is_server_error() {
      warn!(kind, "scrape failed: {error}");
    } else {
      debug!(kind, "rejected request: {error}");
    }

    let detail = anyhow::Error::new(error)
      .chain()
      .map(ToString::to_string)
      .collect::<Vec<_>>()
      .join(": ");

    (
      status,
      Json(json!({
        "detail": detail,
        "kind": kind,
        "success": false,
      })),
    )
      .into_response()
  }
}

async fn health() -> Json<Value> {
  Json(json!({
    "endpoints": {
      "health": "GET /health",
      "scrape": "POST /scrape",
    },
    "service": env!("CARGO_PKG_NAME"),
    "status": "healthy",
    "version": env!("CARGO_PKG_VERSION"),
  }))
}

pub(crate) fn router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/scrape", post(scrape))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn scrape(
  State(state): State<AppState>,
  Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
  let thread = Thread::scrape(&state.client, &request.url)
    .await
    .map_err(ApiError)?;

  Ok(Json(ScrapeResponse {
    thread,
    success: true,
  }))
}

pub(crate) async fn serve(address: &str, client: Client) -> Result {
  let listener = TcpListener::bind(address).await?;

  info!(address = %listener.local_addr()?, "listening");

  axum::serve(listener, router(AppState { client }))
    .with_graceful_shutdown(async {
      if let Err(error) = tokio::signal::ctrl_c().await {
        warn!("could not listen for shutdown signal: {error}");
      }

      info!("shutting down");
    })
    .await?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();

    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn health_lists_endpoints() {
    let Json(body) = health().await;

    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["endpoints"]["scrape"], json!("POST /scrape"));
  }

  #[tokio::test]
  async fn invalid_reference_maps_to_bad_request() {
    let response =
      ApiError(Error::invalid_reference("https://reddit.com/r/test", "nope"))
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;

    assert_eq!(body["success"], json!(false));
    assert_eq!(body["kind"], json!("invalid_reference"));
    assert_eq!(
      body["detail"],
      json!("invalid thread reference `https://reddit.com/r/test`: nope")
    );
  }

  #[tokio::test]
  async fn malformed_payload_maps_to_bad_gateway() {
    let response =
      ApiError(Error::malformed("$[1]", "expected a Listing")).into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;

    assert_eq!(body["kind"], json!("malformed_payload"));
  }

  #[tokio::test]
  async fn scrape_rejects_invalid_url_without_fetching() {
    let state = AppState {
      client: Client::new("test", Duration::from_secs(1)).unwrap(),
    };

    let response = scrape(
      State(state),
      Json(ScrapeRequest {
        url: "https://example.com/r/test/comments/abc".to_string(),
      }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn response_flattens_thread_fields() {
    let response = ScrapeResponse {
      thread: Thread::parse(
        br#"[{"kind":"Listing","data":{"children":[{"kind":"t3","data":{"title":"t"}}]}},{"kind":"Listing","data":{"children":[]}}]"#,
        Some(
          &ThreadReference::normalize("https://reddit.com/r/a/comments/b")
            .unwrap(),
        ),
      )
      .unwrap(),
      success: true,
    };

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["url"], json!("https://old.reddit.com/r/a/comments/b"));
    assert_eq!(value["post"]["url"], value["url"]);
    assert_eq!(value["stats"]["max_depth"], json!(-1));
    assert_eq!(value["comments"], json!([]));
  }
}
