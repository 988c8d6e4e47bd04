mod error;
mod query;
mod routes;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Serves color palettes as PNG swatch images", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "SWATCH_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "SWATCH_PORT", default_value_t = 8080)]
    port: u16,

    /// Log every rendering step
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    lib_swatch::init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    info!("Listening on {}:{}", args.host, args.port);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}
