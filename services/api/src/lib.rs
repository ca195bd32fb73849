mod cli;
mod infra;
mod routes;
mod server;

use verifiable_stubs::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
