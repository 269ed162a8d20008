//! The `coerce` command: coerce JSON data and print the result as JSON.

use std::io::Read;

use sp_coerce::{coerce, SpecSet};
use sp_value::Value;

use super::{read_source, CliError};

/// Coerce the data named by `data_arg` against `specs_arg`.
///
/// Returns the coerced value as compact JSON.
pub fn coerce_command(
    data_arg: &str,
    specs_arg: &str,
    stdin: &mut dyn Read,
) -> Result<String, CliError> {
    let specs = parse_specs(specs_arg)?;
    let text = read_source(data_arg, stdin)?;
    let data: Value =
        serde_json::from_str(&text).map_err(|source| CliError::Json { what: "data", source })?;
    let result = coerce(&data, &specs)?;
    serde_json::to_string(&result).map_err(|source| CliError::Json {
        what: "result",
        source,
    })
}

/// Read a specs argument: a JSON object of field specs when it starts with
/// `{`, otherwise a single spec string.
pub fn parse_specs(arg: &str) -> Result<SpecSet, CliError> {
    if !arg.trim_start().starts_with('{') {
        return Ok(SpecSet::from(arg));
    }
    let specs: Value =
        serde_json::from_str(arg).map_err(|source| CliError::Json { what: "specs", source })?;
    Ok(SpecSet::from_value(&specs)?)
}
