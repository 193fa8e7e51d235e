use actix_web::{guard, web, HttpResponse, Responder};
use memo_types::{ValidationErrorResponse, MEMO_CREATED_MESSAGE};

use crate::validation::parse_memo;
use crate::AppState;

/// Create a memo
async fn create_memo(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    match parse_memo(&body) {
        Ok(memo) => {
            let id = memo.id.clone();
            data.store.append(memo);
            log::debug!("Stored memo {} ({} in store)", id, data.store.len());
            HttpResponse::Ok().json(MEMO_CREATED_MESSAGE)
        }
        Err(detail) => {
            log::debug!("Rejected memo body: {} validation error(s)", detail.len());
            HttpResponse::BadRequest().json(ValidationErrorResponse { detail })
        }
    }
}

/// Memo bodies are not size-capped; the store is unbounded too.
const MEMO_BODY_LIMIT: usize = usize::MAX;

pub fn config(cfg: &mut web::ServiceConfig) {
    // Guarded on POST so other methods fall through to the static handler
    cfg.service(
        web::resource("/memos")
            .guard(guard::Post())
            .app_data(web::PayloadConfig::new(MEMO_BODY_LIMIT))
            .to(create_memo),
    );
}
