//! Custom Tera filters for the release notes templates.
//!
//! Pure string/semver transforms, registered by name on the renderer:
//!
//! - `maj_min` - reduce a semantic version to `major.minor`, keeping a `v`
//!   prefix when the input carries one. The only filter that can fail.
//! - `trim_periods` - strip every period, for Markdown anchor targets.
//! - `split_lines` - split a multi-line note into its lines.
//! - `capitalize_first` - uppercase the first letter character, skipping
//!   leading punctuation, for freeform changelog titles.

use std::collections::HashMap;

use tera::Value;

use crate::core::ReleaseError;

/// Reduce a version string to its `major.minor` form, keeping a `v` prefix
/// when the input carries one.
///
/// # Errors
///
/// Returns [`ReleaseError::InvalidSemver`] when the input is not a
/// parseable semantic version.
fn major_minor_form(raw: &str) -> crate::core::Result<String> {
    let bare = raw.strip_prefix('v');
    let version = semver::Version::parse(bare.unwrap_or(raw))
        .map_err(|_| ReleaseError::InvalidSemver { version: raw.to_string() })?;
    let prefix = if bare.is_some() { "v" } else { "" };
    Ok(format!("{prefix}{}.{}", version.major, version.minor))
}

/// Reduce a semantic version to its `major.minor` form.
///
/// `v3.24.1` becomes `v3.24`; `3.24.1` becomes `3.24`. An input that is not
/// a parseable semantic version fails the whole render; this is the one
/// hard failure point in the pipeline, because a broken version here means
/// the document's link structure would be silently wrong.
pub fn maj_min(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value.as_str().ok_or_else(|| tera::Error::msg("maj_min requires a string"))?;
    let reduced = major_minor_form(raw).map_err(|err| tera::Error::msg(err.to_string()))?;
    Ok(Value::String(reduced))
}

/// Strip every period from the input (`v3.24.1` -> `v3241`).
pub fn trim_periods(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value.as_str().ok_or_else(|| tera::Error::msg("trim_periods requires a string"))?;
    Ok(Value::String(raw.replace('.', "")))
}

/// Split a multi-line note into its lines.
///
/// The separator is fixed to `\n` because that is the only separator the
/// templates split on, and Tera string literals cannot express a newline.
/// Carriage returns are trimmed so CRLF input behaves the same.
pub fn split_lines(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value.as_str().ok_or_else(|| tera::Error::msg("split_lines requires a string"))?;
    let lines: Vec<Value> =
        raw.split('\n').map(|line| Value::String(line.trim_end_matches('\r').to_string())).collect();
    Ok(Value::Array(lines))
}

/// Uppercase the first letter character of the input.
///
/// Leading non-letter characters (whitespace, punctuation, digits) are
/// preserved unchanged and skipped over, so `"-fix"` becomes `"-Fix"` and
/// `"  fix bug"` becomes `"  Fix bug"`. An input with no letters at all is
/// returned as-is.
pub fn capitalize_first(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw =
        value.as_str().ok_or_else(|| tera::Error::msg("capitalize_first requires a string"))?;

    let mut result = String::with_capacity(raw.len());
    let mut capitalized = false;
    for ch in raw.chars() {
        if !capitalized && ch.is_alphabetic() {
            result.extend(ch.to_uppercase());
            capitalized = true;
        } else {
            result.push(ch);
        }
    }
    Ok(Value::String(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(
        filter: fn(&Value, &HashMap<String, Value>) -> tera::Result<Value>,
        input: &str,
    ) -> tera::Result<String> {
        let value = filter(&Value::String(input.to_string()), &HashMap::new())?;
        Ok(value.as_str().unwrap().to_string())
    }

    #[test]
    fn maj_min_keeps_v_prefix() {
        assert_eq!(apply(maj_min, "v3.24.1").unwrap(), "v3.24");
        assert_eq!(apply(maj_min, "1.23.5").unwrap(), "1.23");
    }

    #[test]
    fn maj_min_rejects_garbage() {
        assert!(apply(maj_min, "").is_err());
        assert!(apply(maj_min, "not-a-version").is_err());
        assert!(apply(maj_min, "v1.2").is_err());
    }

    #[test]
    fn major_minor_form_reports_invalid_semver() {
        assert!(matches!(
            major_minor_form("not-a-version"),
            Err(ReleaseError::InvalidSemver { version }) if version == "not-a-version"
        ));
        assert_eq!(major_minor_form("v3.24.1").unwrap(), "v3.24");
    }

    #[test]
    fn trim_periods_strips_all() {
        assert_eq!(apply(trim_periods, "v1.25.3").unwrap(), "v1253");
        assert_eq!(apply(trim_periods, "no periods").unwrap(), "no periods");
    }

    #[test]
    fn capitalize_first_skips_leading_punctuation() {
        assert_eq!(apply(capitalize_first, "-fix").unwrap(), "-Fix");
        assert_eq!(apply(capitalize_first, "  fix bug").unwrap(), "  Fix bug");
        assert_eq!(apply(capitalize_first, "fix bug").unwrap(), "Fix bug");
    }

    #[test]
    fn capitalize_first_leaves_letterless_input_alone() {
        assert_eq!(apply(capitalize_first, "1234 --").unwrap(), "1234 --");
        assert_eq!(apply(capitalize_first, "").unwrap(), "");
    }

    #[test]
    fn split_lines_handles_crlf_and_blank_lines() {
        let value =
            split_lines(&Value::String("one\r\n\nthree".into()), &HashMap::new()).unwrap();
        let lines: Vec<&str> =
            value.as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
        assert_eq!(lines, vec!["one", "", "three"]);
    }

    #[test]
    fn capitalize_first_handles_multibyte_letters() {
        assert_eq!(apply(capitalize_first, "état initial").unwrap(), "État initial");
    }
}
