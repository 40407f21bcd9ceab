use crate::app::App;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::domain::subject::SubjectKind;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Request, Server};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod db;
mod domain;
mod errors;
mod i18n;
mod responses;
mod router;
mod source;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("storefront_history={}", config.log_level))),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.first().map(String::as_str) {
        Some("import") => run_import(&config, &args[1..]),
        Some(other) => Err(ServerError::BadRequest(format!(
            "unknown command '{other}' (expected: import <snapshot.json> [product|item])"
        ))),
        None => run_server(&config),
    };

    if let Err(e) = outcome {
        error!(error = %e, "exiting");
        std::process::exit(1);
    }
}

fn run_server(config: &AppConfig) -> Result<(), ServerError> {
    let app = App::from_config(config)?;

    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let started = Instant::now();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            elapsed = ?started.elapsed(),
            "request"
        );
        resp
    });

    result.map_err(|e| ServerError::Config(format!("server ended with error: {e}")))?;
    info!("server shut down cleanly");
    Ok(())
}

/// `import <snapshot.json> [product|item]` loads a snapshot into the SQLite store.
fn run_import(config: &AppConfig, args: &[String]) -> Result<(), ServerError> {
    let path = args
        .first()
        .ok_or_else(|| ServerError::BadRequest("import needs a snapshot file".to_string()))?;
    let subject = match args.get(1) {
        Some(raw) => SubjectKind::from_route_segment(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown subject '{raw}'")))?,
        None => SubjectKind::Product,
    };

    let file = File::open(path)
        .map_err(|e| ServerError::BadRequest(format!("cannot open {path}: {e}")))?;

    let db = Database::new(config.sqlite_path.clone());
    init_db(&db, &config.schema_path)?;
    source::import_snapshot(&db, subject, BufReader::new(file))?;
    Ok(())
}
