use crate::application::TranslateUseCase;
use crate::domain::error::AppError;
use crate::domain::request::{ErrorResponse, TranslateRequest};
use actix_cors::Cors;
use actix_web::http::StatusCode;
use actix_web::{
    dev::Server, get, middleware, post, web, App, HttpResponse, HttpServer, Responder,
    ResponseError,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct HttpState {
    pub translate_use_case: Arc<TranslateUseCase>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self)).json(ErrorResponse {
            error: self.user_message(),
        })
    }
}

#[post("/translate")]
async fn translate(
    data: web::Data<HttpState>,
    req: web::Json<TranslateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = req.into_inner();

    match data.translate_use_case.execute(&request).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            match &e {
                AppError::BadRequest(_) => warn!(error = %e, "Translate request rejected"),
                _ => error!(error = %e, "Translation failed"),
            }
            Err(e)
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Malformed or non-JSON bodies answer like a missing field would.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Malformed translate request body");
        AppError::BadRequest(String::new()).into()
    })
}

/// Registers the `/api` routes with their shared state.
pub fn configure(state: web::Data<HttpState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state).app_data(json_config()).service(
            web::scope("/api")
                .service(translate)
                .service(health),
        );
    }
}

pub fn start_server(
    translate_use_case: Arc<TranslateUseCase>,
    host: &str,
    port: u16,
) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { translate_use_case });

    let server = HttpServer::new(move || {
        // The browser client may be served from any origin.
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure(state.clone()))
    })
    .bind((host, port))?;

    for addr in server.addrs() {
        info!(%addr, "Translation proxy listening");
    }

    Ok(server.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{
        MISCONFIGURED_MESSAGE, RATE_LIMITED_MESSAGE, UNAUTHORIZED_MESSAGE, UPSTREAM_MESSAGE,
    };
    use crate::domain::error::{Result, BAD_REQUEST_MESSAGE};
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::config::StaticCredential;
    use crate::infrastructure::llm_clients::LLMClient;
    use actix_web::test;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClient {
        reply: Result<String>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LLMClient for StubClient {
        async fn generate(
            &self,
            _config: &LLMConfig,
            _api_key: &str,
            _system: &str,
            _user: &str,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn app_state(reply: Result<String>, key: Option<&str>) -> (web::Data<HttpState>, Arc<StubClient>) {
        let client = Arc::new(StubClient {
            reply,
            calls: AtomicUsize::new(0),
        });
        let use_case = TranslateUseCase::new(
            client.clone(),
            Arc::new(StaticCredential(key.map(String::from))),
            LLMConfig::default(),
            true,
        );
        let state = web::Data::new(HttpState {
            translate_use_case: Arc::new(use_case),
        });
        (state, client)
    }

    async fn post_translate(
        state: web::Data<HttpState>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(App::new().configure(configure(state))).await;
        let req = test::TestRequest::post()
            .uri("/api/translate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_translate_success() {
        let (state, client) = app_state(Ok("Olá".to_string()), Some("sk-test"));
        let (status, body) = post_translate(
            state,
            json!({ "text": "Hello", "sourceLang": "en", "targetLang": "pt" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "translation": "Olá" }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_missing_field_is_bad_request_without_provider_call() {
        let (state, client) = app_state(Ok("unused".to_string()), Some("sk-test"));
        let (status, body) =
            post_translate(state, json!({ "text": "Hello", "sourceLang": "en" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": BAD_REQUEST_MESSAGE }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let (state, client) = app_state(Ok("unused".to_string()), Some("sk-test"));
        let app = test::init_service(App::new().configure(configure(state))).await;
        let req = test::TestRequest::post()
            .uri("/api/translate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], BAD_REQUEST_MESSAGE);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_missing_credential_is_server_error() {
        let (state, client) = app_state(Ok("unused".to_string()), None);
        let (status, body) = post_translate(
            state,
            json!({ "text": "Hello", "sourceLang": "en", "targetLang": "pt" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], MISCONFIGURED_MESSAGE);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_provider_failures_map_to_status() {
        let cases = [
            (
                AppError::Unauthorized("API error (401)".into()),
                StatusCode::UNAUTHORIZED,
                UNAUTHORIZED_MESSAGE,
            ),
            (
                AppError::RateLimited("API error (429)".into()),
                StatusCode::TOO_MANY_REQUESTS,
                RATE_LIMITED_MESSAGE,
            ),
            (
                AppError::Upstream("connection reset by peer".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_MESSAGE,
            ),
        ];

        for (provider_error, expected_status, expected_message) in cases {
            let (state, _) = app_state(Err(provider_error), Some("sk-test"));
            let (status, body) = post_translate(
                state,
                json!({ "text": "Hello", "sourceLang": "en", "targetLang": "pt" }),
            )
            .await;
            assert_eq!(status, expected_status);
            assert_eq!(body, json!({ "error": expected_message }));
        }
    }

    #[actix_web::test]
    async fn test_health() {
        let (state, _) = app_state(Ok(String::new()), None);
        let app = test::init_service(App::new().configure(configure(state))).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
