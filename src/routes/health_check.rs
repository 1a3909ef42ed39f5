use actix_web::HttpResponse;

/// `GET /health_check`
///
/// Note: viewing the http response requires `curl -v`
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
