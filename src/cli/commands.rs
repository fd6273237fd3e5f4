//! Command execution: resolve parameters, run the generator, report

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::generate_to_path;
use crate::params::Params;

#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // Validation happens before the output file is touched, so a bad
    // parameter never leaves an empty fixture behind.
    let params = Params::resolve(cli.num_vars, cli.depth)?;
    debug!(
        "num_vars: {}, depth: {}, expecting {} rows",
        params.num_vars,
        params.depth,
        params.total_rows()
    );

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(params.default_output_name()));

    let rows = generate_to_path(&params, &path)?;
    output::action("Generated", &format!("{} ({} rows)", path.display(), rows));
    Ok(())
}
