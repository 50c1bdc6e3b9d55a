// POST /analyze — analyze one uploaded text file.
//
// Expects a multipart form with a `file` field. The bytes are decoded and
// size-checked here, then the CPU-bound analysis runs on the blocking pool
// so it never stalls the async workers.
//
// Returns 200 with the analysis report (sections that failed carry an
// `error` field), 400 when no file was sent, 413 when the upload is over the
// size cap, and 422 when it holds no decodable text.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, info};

use crate::error::AnalysisError;
use crate::pipeline::Document;
use crate::web::{api_error, AppState};

const FILE_FIELD: &str = "file";
const DEFAULT_FILENAME: &str = "upload.txt";

pub async fn analyze(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(FILE_FIELD) {
                    continue;
                }
                let filename = field.file_name().unwrap_or(DEFAULT_FILENAME).to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some((filename, bytes));
                        break;
                    }
                    Err(e) => return api_error(e.status(), &e.body_text()),
                }
            }
            Ok(None) => break,
            Err(e) => return api_error(e.status(), &e.body_text()),
        }
    }

    let Some((filename, bytes)) = upload else {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Missing multipart field `file` with the document to analyze",
        );
    };

    let doc = match Document::from_bytes(filename, &bytes, state.config.max_input_bytes) {
        Ok(doc) => doc,
        Err(e @ AnalysisError::InputTooLarge { .. }) => {
            return api_error(StatusCode::PAYLOAD_TOO_LARGE, &e.to_string())
        }
        Err(e) => return api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };

    info!(filename = %doc.filename, bytes = bytes.len(), "Received document");

    let analyzer = state.analyzer.clone();
    match tokio::task::spawn_blocking(move || analyzer.analyze_document(&doc)).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!(error = %e, "Analysis task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
    }
}
