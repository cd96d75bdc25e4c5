//! Parsing and emitting of the hosting-script wrapper form.
//!
//! Documentation builds ship the index as a script that assigns the JSON
//! array to a global binding, e.g. `var lunrData = [...];`. This module peels
//! that wrapper off on load and puts it back on emit. It is a recognizer for
//! exactly that assignment shape, not a JavaScript evaluator.

use anyhow::{Result, bail};

/// Binding name the original documentation build uses.
pub const DEFAULT_VAR_NAME: &str = "lunrData";

/// Check that a name is usable as a JS identifier for the global binding.
pub fn validate_var_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        bail!("Invalid binding name '{}': not a JavaScript identifier", name);
    }
    Ok(())
}

/// Strip the global-assignment wrapper from a script source.
///
/// Accepts `var`, `let`, or `const` followed by an identifier, `=`, a JSON
/// array, and an optional trailing semicolon. Returns the binding name and
/// the array body (not yet parsed as JSON).
pub fn parse_global_assignment(source: &str) -> Result<(&str, &str)> {
    let source = source.trim_start_matches('\u{feff}').trim();

    let rest = ["var", "let", "const"]
        .iter()
        .find_map(|kw| {
            let rest = source.strip_prefix(kw)?;
            // The keyword must be a whole word, not a prefix of the binding.
            rest.starts_with(|c: char| c.is_whitespace()).then_some(rest)
        })
        .ok_or_else(|| {
            anyhow::anyhow!("Expected a global assignment (var/let/const), found something else")
        })?;

    let rest = rest.trim_start();
    let name_len = rest
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
        .map_or(rest.len(), |(i, _)| i);
    let (name, rest) = rest.split_at(name_len);
    validate_var_name(name)?;

    let rest = rest.trim_start();
    let Some(rest) = rest.strip_prefix('=') else {
        bail!("Expected '=' after binding name '{}'", name);
    };

    let body = rest.trim();
    if !body.starts_with('[') {
        bail!("Expected a JSON array after 'var {} ='", name);
    }
    let Some(end) = body.rfind(']') else {
        bail!("Unterminated array in assignment to '{}'", name);
    };
    let (array, tail) = body.split_at(end + 1);

    let tail = tail.trim();
    if !tail.is_empty() && tail != ";" {
        bail!("Trailing content after assignment to '{}': '{}'", name, tail);
    }

    Ok((name, array))
}

/// Wrap a JSON array back into the script form the documentation site loads.
pub fn emit_global_assignment(var_name: &str, json_array: &str) -> Result<String> {
    validate_var_name(var_name)?;
    Ok(format!("var {} = {};\n", var_name, json_array))
}
