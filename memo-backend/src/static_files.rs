//! Static front-end assets, with SPA fallback to `index.html` for any path
//! that has no matching file. Without an index the fallback answers 404.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpResponse};
use std::path::Path;

pub const INDEX_FILE: &str = "index.html";

/// Mount the asset directory at `/`. Must be registered after every API route.
pub fn config(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    let index_path = static_dir.join(INDEX_FILE);

    cfg.service(
        Files::new("/", static_dir)
            .index_file(INDEX_FILE)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index_path = index_path.clone();
                async move {
                    let (http_req, _payload) = req.into_parts();
                    let response = match NamedFile::open_async(&index_path).await {
                        Ok(file) => file.into_response(&http_req),
                        Err(e) => {
                            log::debug!(
                                "No fallback for {}: {}: {}",
                                http_req.path(),
                                index_path.display(),
                                e
                            );
                            HttpResponse::NotFound().finish()
                        }
                    };
                    Ok::<_, actix_web::Error>(ServiceResponse::new(http_req, response))
                }
            })),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers;
    use crate::store::MemoStore;
    use crate::AppState;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use std::fs;
    use std::sync::Arc;

    const INDEX_BODY: &str = "<html><body>memo</body></html>";

    fn asset_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join(INDEX_FILE), INDEX_BODY).unwrap();
        fs::write(dir.path().join("app.js"), "console.log('memo');").unwrap();
        fs::create_dir(dir.path().join("about")).unwrap();
        fs::write(dir.path().join("about").join(INDEX_FILE), "about page").unwrap();
        dir
    }

    #[actix_web::test]
    async fn test_root_serves_index() {
        let dir = asset_dir();
        let app = test::init_service(App::new().configure(|cfg| config(cfg, dir.path()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, INDEX_BODY.as_bytes());
    }

    #[actix_web::test]
    async fn test_file_served_with_content_type() {
        let dir = asset_dir();
        let app = test::init_service(App::new().configure(|cfg| config(cfg, dir.path()))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/app.js").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.contains("javascript"), "got {}", content_type);
        assert_eq!(test::read_body(resp).await, "console.log('memo');".as_bytes());
    }

    #[actix_web::test]
    async fn test_directory_serves_its_index() {
        let dir = asset_dir();
        let app = test::init_service(App::new().configure(|cfg| config(cfg, dir.path()))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/about/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "about page".as_bytes());
    }

    #[actix_web::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = asset_dir();
        let app = test::init_service(App::new().configure(|cfg| config(cfg, dir.path()))).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/memo/42/edit").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, INDEX_BODY.as_bytes());
    }

    #[actix_web::test]
    async fn test_missing_index_is_not_found() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let app = test::init_service(App::new().configure(|cfg| config(cfg, dir.path()))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/anything").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_get_memos_falls_through_to_static() {
        let dir = asset_dir();
        let store = Arc::new(MemoStore::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    store: Arc::clone(&store),
                }))
                .configure(controllers::memos::config)
                .configure(|cfg| config(cfg, dir.path())),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/memos").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, INDEX_BODY.as_bytes());

        let req = test::TestRequest::post()
            .uri("/memos")
            .set_json(serde_json::json!({ "id": "1", "content": "hello" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        assert_eq!(store.len(), 1);
    }
}
