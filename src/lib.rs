use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod generator;
pub mod params;
pub mod util;
pub mod writer;

pub use errors::{GeneratorError, GeneratorResult};
pub use generator::FixtureGenerator;
pub use params::Params;
pub use writer::RowWriter;

/// Generate the fixture into an arbitrary sink. Returns the number of
/// rows written.
pub fn generate_fixture<W: Write>(params: &Params, sink: W) -> GeneratorResult<u64> {
    let mut out = RowWriter::new(sink);
    FixtureGenerator::new(*params).run(&mut out)?;
    out.flush()?;
    Ok(out.rows_written())
}

/// Generate the fixture into a file, creating or overwriting it.
///
/// Parameters are validated before this is called, so a failure here
/// leaves at most a truncated file behind; this is a one-shot batch
/// generator with no partial-output cleanup.
#[instrument]
pub fn generate_to_path(params: &Params, path: &Path) -> GeneratorResult<u64> {
    debug!("writing fixture to {:?}", path);
    let file = File::create(path)?;
    generate_fixture(params, BufWriter::new(file))
}
