#![deny(missing_docs)]

//! # apiDoc -> OpenAPI CLI
//!
//! Command line front-end for `apidoc-oas-core`.
//!
//! ```text
//! apidoc-to-openapi apidoc_output/api_data.js > openapi.json
//! apidoc-to-openapi apidoc_output/api_data.js docs/openapi.json
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod convert;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Convert apiDoc api_data.js into an OpenAPI 3.0 document")]
struct Cli {
    #[clap(flatten)]
    convert: convert::ConvertArgs,

    /// Increase log verbosity on stderr (-v info, -vv debug). `RUST_LOG` wins when set.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match convert::execute(&cli.convert) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
