//! The `check` command: validate spec strings without any data.

use sp_coerce::validate;
use sp_spec::{Spec, SpecError};

/// Parse and validate one spec, describing it on success.
///
/// The description names the type and the value a missing field gets,
/// e.g. `ok array.int -> array (default [])`.
pub fn check_spec(text: &str) -> Result<String, SpecError> {
    let spec = Spec::parse(text)?;
    validate(&spec)?;
    let tag = spec.tag();
    let zero = serde_json::to_string(&tag.zero_value()).unwrap_or_default();
    Ok(format!("ok {text} -> {tag} (default {zero})"))
}

/// Check every spec, one report line each. The flag is false if any failed.
pub fn check_specs<S: AsRef<str>>(specs: &[S]) -> (Vec<String>, bool) {
    let mut all_ok = true;
    let lines = specs
        .iter()
        .map(|spec| match check_spec(spec.as_ref()) {
            Ok(line) => line,
            Err(err) => {
                all_ok = false;
                format!("error: {err}")
            }
        })
        .collect();
    (lines, all_ok)
}
