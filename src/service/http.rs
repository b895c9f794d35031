use actix_web::{http::header, web, HttpRequest, HttpResponse};
use tracing::{error, info, warn};

use super::{check_headers, process_body, status_for, BodyLimit, RequestError};

/// Routes every method on `/` to [`find_path_handler`] so that wrong methods
/// get a JSON error instead of the router's default response.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::route().to(find_path_handler)));
}

/// Handles one request. The body limit is taken from a [`BodyLimit`] in the
/// app data, [`BodyLimit::default`] if there is none.
pub async fn find_path_handler(
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, RequestError> {
    let limit = req.app_data::<BodyLimit>().copied().unwrap_or_default();

    match respond(&req, payload, limit).await {
        Ok(response) => Ok(response),
        Err(err @ RequestError::Search(_)) => {
            error!("search failed: {:?}", err);
            Err(err)
        }
        Err(err) => {
            warn!(method = %req.method(), "rejected request: {}", err);
            Err(err)
        }
    }
}

async fn respond(
    req: &HttpRequest,
    payload: web::Payload,
    BodyLimit(limit): BodyLimit,
) -> Result<HttpResponse, RequestError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    check_headers(req.method(), content_type)?;

    let body = payload
        .to_bytes_limited(limit)
        .await
        .map_err(|_| RequestError::PayloadTooLarge(limit))?
        .map_err(|err| {
            warn!("unable to read body: {}", err);
            RequestError::UnreadableBody
        })?;

    let result = process_body(&body)?;
    let status = status_for(&result);
    info!(
        source = %result.source,
        destination = %result.destination,
        cost = ?result.cost,
        edges = result.path.len(),
        "{}",
        status
    );
    Ok(HttpResponse::build(status).json(result))
}
