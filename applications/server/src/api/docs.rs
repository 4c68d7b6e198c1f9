/// API documentation routes
use crate::error::ServerError;
use axum::{
    http::{header, Uri},
    response::{Html, IntoResponse, Response},
};

const OPENAPI_DOCUMENT: &str = include_str!("openapi.json");

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Verse API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/doc.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /swagger/doc.json
pub async fn openapi_document() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

/// GET /swagger/*
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// Router fallback: the UI page under `/swagger`, JSON 404 elsewhere
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/swagger" || path.starts_with("/swagger/") {
        return swagger_ui().await.into_response();
    }

    ServerError::NotFound("Route not found".to_string()).into_response()
}
