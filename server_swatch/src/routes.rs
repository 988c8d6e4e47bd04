use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use lib_swatch::raster::noise;
use lib_swatch::{encode_png, parse_palette, render_palette, render_status, Palette};
use log::{debug, info, warn};

use crate::error::ServerError;
use crate::query::{NoiseQuery, PaletteQuery};

pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ServerError::InvalidQuery(err.to_string()).into());

    cfg.app_data(query_config)
        .service(
            web::resource("/")
                .route(web::get().to(greet))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/palette")
                .route(web::get().to(palette_image))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/noise")
                .route(web::get().to(noise_image))
                .default_service(web::to(method_not_allowed)),
        );
}

// The body is fully encoded before the status line is chosen.
fn png_response(status: StatusCode, png: Vec<u8>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::png())
        .body(png)
}

/// Runs rendering and encoding on the blocking pool so large images do not
/// stall the async worker.
async fn render_blocking<F>(render: F) -> Result<Vec<u8>, ServerError>
where
    F: FnOnce() -> Result<Vec<u8>, ServerError> + Send + 'static,
{
    web::block(render).await?
}

async fn status_image(status: StatusCode) -> Result<HttpResponse, ServerError> {
    let png = render_blocking(move || Ok(encode_png(render_status(status.as_u16()))?)).await?;
    Ok(png_response(status, png))
}

async fn greet(req: HttpRequest) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!(
            "Hello, World! You asked for {} with query {:?}",
            req.path(),
            req.query_string()
        ))
}

async fn palette_image(query: web::Query<PaletteQuery>) -> Result<HttpResponse, ServerError> {
    debug!("{:?}", query);
    let config = query.layout_config()?;
    let colors = query.into_inner().colors;

    let png = render_blocking(move || {
        let canvas = render_palette(&colors, &config)?;
        Ok(encode_png(canvas)?)
    })
    .await?;

    info!("Serving palette image ({} bytes)", png.len());
    Ok(png_response(StatusCode::OK, png))
}

async fn noise_image(query: web::Query<NoiseQuery>) -> Result<HttpResponse, ServerError> {
    debug!("{:?}", query);
    let (width, height) = query.dimensions()?;
    let colors = match query.colors.as_deref() {
        Some(colors) => parse_palette(colors)?,
        None => Palette::default(),
    };

    let png = render_blocking(move || {
        let canvas = noise(width, height, &colors, &mut rand::thread_rng())?;
        Ok(encode_png(canvas)?)
    })
    .await?;
    Ok(png_response(StatusCode::OK, png))
}

/// Fallback for every unmatched request: a 404 status image.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    warn!("No route for {} {}", req.method(), req.path());
    status_image(StatusCode::NOT_FOUND).await
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ServerError> {
    warn!("{} not allowed on {}", req.method(), req.path());
    status_image(StatusCode::METHOD_NOT_ALLOWED).await
}
