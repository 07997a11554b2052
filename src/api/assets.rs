//! Static front-end bundle with single-page-app fallback

use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::web;
use log::{info, warn};

const INDEX_FILE: &str = "index.html";

/// Mount `static_dir` at `/`. Must be configured after the API routes.
pub fn configure_assets(static_dir: &Path, cfg: &mut web::ServiceConfig) {
    if !static_dir.is_dir() {
        warn!("Static directory {} not found, front-end not served", static_dir.display());
        return;
    }
    info!("Serving front-end from {}", static_dir.display());

    let index = static_dir.join(INDEX_FILE);
    cfg.service(
        Files::new("/", static_dir)
            .index_file(INDEX_FILE)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(&index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}
