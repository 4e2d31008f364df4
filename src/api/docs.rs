use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "llmplan",
        description = "Text summarization backed by an OpenAI-compatible LLM endpoint"
    ),
    paths(
        crate::api::handlers::summary::summarize_handler,
        crate::api::handlers::health::summary_health_handler,
        crate::api::handlers::health::app_health_handler
    ),
    components(
        schemas(
            crate::internal_api::SummaryRequest,
            crate::internal_api::SummaryResponse,
            crate::internal_api::HealthCheckResponse,
            crate::internal_api::HealthStatus,
            crate::internal_api::AppHealthResponse,
            crate::internal_api::ErrorResponse,
            crate::domain::SummaryType,
            crate::domain::Language,
            crate::domain::SummaryId
        )
    ),
    tags(
        (name = "summary", description = "Text summarization"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::{schema::Schema, RefOr};

    #[test]
    fn openapi_includes_summary_contract() {
        let openapi = ApiDoc::openapi();

        let schemas = openapi.components.as_ref().expect("components").schemas.clone();
        let request_schema = schemas.get("SummaryRequest").expect("SummaryRequest schema");
        let request_object = match request_schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::T(_) => panic!("expected object schema"),
            RefOr::Ref(_) => panic!("expected inline schema, found ref"),
        };

        let required = request_object.required.clone();
        assert!(required.contains(&"text".to_string()));
        assert!(!required.contains(&"max_tokens".to_string()));

        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("SummaryResponse"));
    }

    #[test]
    fn openapi_includes_all_endpoints() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        assert!(paths.contains_key("/api/v1/summary/"));
        assert!(paths.contains_key("/api/v1/summary/health"));
        assert!(paths.contains_key("/api/v1/health"));
    }
}
