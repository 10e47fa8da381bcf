//! HTTP layer for CurviPath.
//!
//! The server provides:
//! - `/get_data` for GET requests evaluating motion equations and, when
//!   asked, solving an exercise
//! - Static file serving from the configured directory

mod config;
mod request;

use std::convert::Infallible;

use curvipath_core::solve;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use warp::{Filter, Rejection, Reply, http::StatusCode};

pub use config::{Config, ConfigError, DEFAULT_HOST, DEFAULT_MAX_INTERVALS, DEFAULT_PORT};
pub use request::{
    DEFAULT_INTERVALS, DEFAULT_T_MAX, DataRequest, DataResponse, Exercise, RequestError, get_data,
};

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, `info` by default.
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The `/get_data` endpoint alone.
///
/// Requests asking for more than `max_intervals` intervals are answered with
/// 400.
pub fn get_data_route(
    solver: solve::Config,
    max_intervals: usize,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("get_data")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<Vec<(String, String)>>())
        .map(move |pairs: Vec<(String, String)>| handle_get_data(&pairs, &solver, max_intervals))
}

/// Every route the server answers, with unmatched requests answered as JSON.
pub fn routes(config: Config) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    get_data_route(config.solver, config.max_intervals)
        .or(warp::fs::dir(config.static_dir))
        .recover(handle_rejection)
}

/// Serves [`routes`] until the process exits.
pub async fn run(config: Config) {
    tracing::info!(
        addr = %config.addr,
        static_dir = %config.static_dir.display(),
        "server running",
    );
    let addr = config.addr;
    warp::serve(routes(config)).run(addr).await;
}

fn handle_get_data(
    pairs: &[(String, String)],
    solver: &solve::Config,
    max_intervals: usize,
) -> impl Reply + use<> {
    tracing::debug!(?pairs, "get_data");
    let result = DataRequest::from_pairs(pairs)
        .and_then(|request| request.within(max_intervals))
        .and_then(|request| get_data(request, solver));
    match result {
        Ok(response) => warp::reply::with_status(warp::reply::json(&response), StatusCode::OK),
        Err(error) => {
            tracing::warn!(%error, "rejected get_data request");
            let body = json!({ "error": error.to_string() });
            warp::reply::with_status(warp::reply::json(&body), StatusCode::BAD_REQUEST)
        }
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        (StatusCode::BAD_REQUEST, format!("{rejection:?}"))
    };
    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        status,
    ))
}
