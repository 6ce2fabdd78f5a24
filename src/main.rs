use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::debug!("band-graph {}", env!("CARGO_PKG_VERSION"));

    match band_graph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
