mod cli;
mod report;

use child_signals::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
