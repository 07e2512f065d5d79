mod cli;
mod commands;

use ayursutra::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
