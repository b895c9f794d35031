use actix_web::{App, HttpServer};
use clap::Parser;
use shortest_path_service::{
    service::{http::configure, BodyLimit},
    utility::init_tracing,
};
use tracing::info;

/// Serves shortest path queries over HTTP.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    payload_limit: usize,

    /// Number of worker threads, defaults to the number of cores
    #[arg(short, long)]
    workers: Option<usize>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();
    let args = Args::parse();

    let body_limit = BodyLimit(args.payload_limit);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(body_limit)
            .configure(configure)
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }

    info!("Serving on {}:{}", args.host, args.port);
    server.bind((args.host.as_str(), args.port))?.run().await
}
