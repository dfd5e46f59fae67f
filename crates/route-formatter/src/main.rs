use std::process::ExitCode;

fn main() -> ExitCode {
    match route_formatter::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
