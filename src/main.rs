use crate::config::Config;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};

mod config;
mod dataset;
mod domain;
mod errors;
mod forms;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = Config::parse();
    logging::init_logging();

    // 1️⃣ Load the listings once; they are shared read-only by every worker
    let table = match dataset::load_from_path(&cfg.data) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            error!(path = %cfg.data.display(), "❌ Failed to load listings: {e}");
            std::process::exit(1);
        }
    };

    if table.is_empty() {
        warn!(path = %cfg.data.display(), "No listings survived normalization");
    }

    // 2️⃣ Start the server
    info!("Starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &table) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
