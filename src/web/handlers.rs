use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use log::{error, info};
use uuid::Uuid;

use crate::error::DraftError;
use crate::model::GenerationRequest;
use crate::prompt::{build_transcript, ActionKey};
use crate::web::cors;
use crate::web::models::{DraftRequest, GeneratedDocument};
use crate::AppState;

// Single entry point: preflight short-circuits, anything else drafts a document
pub async fn dispatch(
    req: HttpRequest,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, DraftError> {
    // Preflight never touches the body
    if *req.method() == Method::OPTIONS {
        return Ok(preflight());
    }

    let request_id = Uuid::new_v4();

    // Oversized or malformed bodies still answer with the JSON error shape
    let request = read_body(payload, data.config.max_body_bytes)
        .await
        .and_then(|body| {
            serde_json::from_slice::<DraftRequest>(&body)
                .map_err(|e| DraftError::InvalidRequest(e.to_string()))
        });
    let action = request
        .as_ref()
        .map(|r| r.action_key.clone())
        .unwrap_or_else(|_| "<unparsed>".to_string());

    let outcome = match request {
        Ok(request) => {
            info!(
                "Draft request {}: action {} with {} messages",
                request_id,
                request.action_key,
                request.chat_history.len()
            );
            generate_document(&data, &request).await
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(document) => {
            let mut builder = HttpResponse::Ok();
            cors::apply(&mut builder);
            Ok(builder.json(document))
        }
        Err(e) => {
            error!("Error in action {} (request {}): {}", action, request_id, e);
            Err(e)
        }
    }
}

async fn read_body(payload: web::Payload, limit: usize) -> Result<web::Bytes, DraftError> {
    match payload.to_bytes_limited(limit).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => Err(DraftError::InvalidRequest(e.to_string())),
        Err(_) => Err(DraftError::InvalidRequest(format!(
            "body exceeds {} bytes",
            limit
        ))),
    }
}

pub fn preflight() -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    cors::apply(&mut builder);
    builder.finish()
}

pub async fn generate_document(
    state: &AppState,
    request: &DraftRequest,
) -> Result<GeneratedDocument, DraftError> {
    let api_key = state.config.api_key()?;
    let transcript = build_transcript(&request.chat_history);
    let action: ActionKey = request.action_key.parse()?;
    let prompt = state.composer.compose(action, &transcript)?;

    let text = state
        .generator
        .generate(&GenerationRequest {
            api_key,
            model: &state.config.gemini_model,
            prompt: &prompt,
        })
        .await?;

    Ok(GeneratedDocument { text })
}
