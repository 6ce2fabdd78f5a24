mod handlers;
pub mod parse;

use clap::Parser;
pub use handlers::config_for;
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Segments(a) => handlers::segments(&a),
        parse::Command::Sweep(a) => handlers::sweep(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
