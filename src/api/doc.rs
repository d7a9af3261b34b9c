/*
 * Responsibility
 * - OpenAPI ドキュメント (ApiDoc) の定義。info は ServiceMeta から埋める
 * - /docs (Swagger UI), /redoc (ReDoc), /openapi.json の配信
 * - /docs は redirect せずにその場で 200 を返す (asset は /docs/ 配下)
 */
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use utoipa::OpenApi;
use utoipa_redoc::Redoc;
use utoipa_swagger_ui::Config as SwaggerConfig;

use crate::api::handlers::{health, root};
use crate::config::ServiceMeta;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";
pub const OPENAPI_PATH: &str = "/openapi.json";

// Makes the relative asset links of the Swagger UI index resolve under /docs/
// even when the page is served at the bare /docs path.
const DOCS_BASE_TAG: &str = "<base href=\"/docs/\">";

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(health::health, root::root),
    components(schemas(ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Service", description = "Service identity"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document with `info` filled from the service metadata.
pub fn openapi(meta: &ServiceMeta) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = meta.title.to_string();
    doc.info.description = Some(meta.description.to_string());
    doc.info.version = meta.version.to_string();
    doc
}

/// Swagger UI under `/docs`, ReDoc under `/redoc`, raw document at `/openapi.json`.
pub fn routes(meta: &ServiceMeta) -> Router<AppState> {
    let spec = openapi(meta);
    // Rendered once; the page embeds the document.
    let redoc_html = Redoc::new(spec.clone()).to_html();
    let swagger = Arc::new(SwaggerConfig::new([OPENAPI_PATH]));

    let index = {
        let swagger = swagger.clone();
        move || async move { swagger_file("", &swagger) }
    };
    let asset = move |Path(rest): Path<String>| async move { swagger_file(&rest, &swagger) };

    Router::new()
        .route(DOCS_PATH, get(index.clone()))
        .route("/docs/", get(index))
        .route("/docs/{*rest}", get(asset))
        .route(OPENAPI_PATH, get(move || async move { Json(spec) }))
        .route(
            REDOC_PATH,
            get(move || async move { Html(redoc_html) }),
        )
}

fn swagger_file(path: &str, config: &Arc<SwaggerConfig<'static>>) -> Response {
    match utoipa_swagger_ui::serve(path, config.clone()) {
        Ok(Some(file)) if file.content_type.starts_with("text/html") => {
            let html = String::from_utf8_lossy(&file.bytes).replacen(
                "<head>",
                &format!("<head>{DOCS_BASE_TAG}"),
                1,
            );
            Html(html).into_response()
        }
        Ok(Some(file)) => (
            [(header::CONTENT_TYPE, file.content_type)],
            file.bytes.into_owned(),
        )
            .into_response(),
        Ok(None) => AppError::NotFound.into_response(),
        Err(err) => {
            tracing::error!(error = %err, path, "failed to serve swagger ui asset");
            AppError::Internal.into_response()
        }
    }
}
