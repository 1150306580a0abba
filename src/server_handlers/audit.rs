use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::stream::StreamExt;
use tracing::{info, warn};

use super::run_blocking;
use crate::api_json::AuditTextRequest;
use crate::audit::{extract_text_from_pdf, parse_degree_audit};
use crate::error::{Result, SchedulerError};

/// Tamaño máximo aceptado para un PDF de auditoría.
pub const MAX_PDF_BYTES: usize = 20 * 1024 * 1024;

/// POST /audit/text
/// Body: `{"text": "..."}` con el texto ya extraído de la auditoría.
pub async fn audit_text_handler(body: web::Json<AuditTextRequest>) -> Result<HttpResponse> {
    let text = body.into_inner().text;
    let audit = parse_degree_audit(&text);
    info!("auditoría (texto): {} requisitos pendientes", audit.still_needed.len());
    Ok(HttpResponse::Ok().json(audit))
}

/// POST /audit/pdf (multipart)
/// Se usa el primer campo que traiga un archivo; el resto se ignora.
pub async fn audit_pdf_handler(mut payload: Multipart) -> Result<HttpResponse> {
    let mut pdf: Option<Vec<u8>> = None;

    while let Some(field_res) = payload.next().await {
        let mut field = field_res.map_err(|e| SchedulerError::Upload(format!("multipart field error: {}", e)))?;
        let filename = field.content_disposition().get_filename().map(|s| s.to_string());
        if pdf.is_some() || filename.is_none() {
            // drenar el campo para poder leer el siguiente
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| SchedulerError::Upload(format!("upload stream error: {}", e)))?;
            }
            continue;
        }

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| SchedulerError::Upload(format!("upload stream error: {}", e)))?;
            if bytes.len() + chunk.len() > MAX_PDF_BYTES {
                return Err(SchedulerError::Upload(format!("file exceeds {} bytes", MAX_PDF_BYTES)));
            }
            bytes.extend_from_slice(&chunk);
        }
        info!("📄 PDF recibido: {} ({} bytes)", filename.unwrap_or_default(), bytes.len());
        pdf = Some(bytes);
    }

    let Some(bytes) = pdf else {
        warn!("petición /audit/pdf sin archivo");
        return Err(SchedulerError::Upload("no file field in multipart body".to_string()));
    };

    let audit = run_blocking(move || {
        let text = extract_text_from_pdf(&bytes)?;
        Ok(parse_degree_audit(&text))
    })
    .await?;

    Ok(HttpResponse::Ok().json(audit))
}
