mod cli;
mod infra;
mod report;
mod routes;
mod server;

use diaspora_ro::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
