mod cli;
mod demo;
mod infra;

use session_score::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
