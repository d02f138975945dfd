//! Environment variable expansion for configuration strings.

use std::cell::RefCell;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// An unset variable without a default is an error naming `field`.
/// Bare `$VAR` is left as-is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let unset = RefCell::new(Vec::new());
    let expanded = shellexpand::env_with_context_no_errors(value, |var| {
        let found = std::env::var(var).ok();
        if found.is_none() {
            unset.borrow_mut().push(var.to_owned());
        }
        found
    })
    .into_owned();

    // Unset variables with a default were substituted; the rest stay literal.
    let unset = unset.into_inner();
    if let Some(var) = unset
        .iter()
        .find(|var| expanded.contains(&format!("${{{var}}}")))
    {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{var}}} not set"),
        });
    }

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("DOCPUB_TEST_SIMPLE", "hello");
        }
        let result = expand_env("${DOCPUB_TEST_SIMPLE}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("DOCPUB_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_value() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("DOCPUB_TEST_DEFAULT", "hello");
        }
        let result = expand_env("${DOCPUB_TEST_DEFAULT:-world}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("DOCPUB_TEST_DEFAULT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        let result = expand_env("${DOCPUB_TEST_UNSET_A:-fallback}", "test.field").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_missing_var_error() {
        let err = expand_env("Bearer ${DOCPUB_TEST_UNSET_B}", "google_docs.access_token")
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("DOCPUB_TEST_UNSET_B"));
        assert!(message.contains("google_docs.access_token"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("literal $HOME string", "test.field").unwrap();
        assert_eq!(result, "literal $HOME string");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: variable names are unique to this test
        unsafe {
            std::env::set_var("DOCPUB_TEST_HOST", "docs.example.com");
        }
        let result = expand_env("https://${DOCPUB_TEST_HOST}/api", "test.url").unwrap();
        assert_eq!(result, "https://docs.example.com/api");
        unsafe {
            std::env::remove_var("DOCPUB_TEST_HOST");
        }
    }
}
