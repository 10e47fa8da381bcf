use curvipath_server::{Config, init_tracing, run};

#[tokio::main]
async fn main() {
    init_tracing();

    match Config::from_env() {
        Ok(config) => run(config).await,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(2);
        }
    }
}
