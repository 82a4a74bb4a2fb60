//! Parser for the `variables` step input
//!
//! The input holds one variable per line, either `KEY=value` or a bare `KEY`.
//! A bare key takes its value from the environment. Everything after the
//! first `=` is the value, so values may contain `=` themselves. `KEY=` is an
//! explicit empty value and is not looked up in the environment.

use crate::repository::EnvRepository;
use pipeshare_core::{EnvVar, Error, Result, SecretKeys};
use tracing::{debug, trace};

/// Parse newline separated variable definitions, preserving input order
pub fn parse_env_vars(
    input: &str,
    secret_keys: &SecretKeys,
    env: &dyn EnvRepository,
) -> Result<Vec<EnvVar>> {
    let mut env_vars = Vec::new();

    for line in input.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key, value.to_string()),
            None => {
                trace!(key = %line, "Resolving bare key from environment");
                (line, env.get_or_empty(line)?)
            }
        };

        // line starting with = has no key
        if key.is_empty() {
            return Err(Error::invalid_env_var(line));
        }

        let env_var = EnvVar::new(key, value, secret_keys.contains(key))?;
        debug!(env_var = %env_var, "Parsed env var");
        env_vars.push(env_var);
    }

    Ok(env_vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MapEnvironment;
    use proptest::prelude::*;

    fn parse(input: &str) -> Result<Vec<EnvVar>> {
        parse_env_vars(input, &SecretKeys::new(), &MapEnvironment::new())
    }

    #[test]
    fn test_parse_preserves_order_and_values() {
        let vars = parse("A=1\nB=2").unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!((vars[0].key(), vars[0].value()), ("A", "1"));
        assert_eq!((vars[1].key(), vars[1].value()), ("B", "2"));
    }

    #[test]
    fn test_value_keeps_extra_equals_signs() {
        let vars = parse("MY_ENV_KEY=my value that contains = so that (=^･ｪ･^=))ﾉ彡☆").unwrap();

        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].key(), "MY_ENV_KEY");
        assert_eq!(vars[0].value(), "my value that contains = so that (=^･ｪ･^=))ﾉ彡☆");
    }

    #[test]
    fn test_bare_key_resolves_from_environment() {
        let env = MapEnvironment::new().with("EXISTING", "existing env");
        let vars = parse_env_vars("EXISTING", &SecretKeys::new(), &env).unwrap();

        assert_eq!(vars, vec![EnvVar::new("EXISTING", "existing env", false).unwrap()]);
    }

    #[test]
    fn test_unset_bare_key_resolves_to_empty() {
        let vars = parse("NOT_SET_ANYWHERE").unwrap();

        assert_eq!(vars[0].key(), "NOT_SET_ANYWHERE");
        assert_eq!(vars[0].value(), "");
    }

    #[test]
    fn test_explicit_empty_value_is_kept() {
        let env = MapEnvironment::new().with("EMPTY", "from env");
        let vars = parse_env_vars("EMPTY=", &SecretKeys::new(), &env).unwrap();

        assert_eq!(vars[0].value(), "");
    }

    #[test]
    fn test_line_without_key_is_rejected() {
        let err = parse("A=1\n=x").unwrap_err();

        assert!(matches!(err, Error::InvalidEnvVar { ref line } if line == "=x"));
        assert!(err.to_string().contains("=x"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let vars = parse("\n  A=1  \n\n\t\r\nB=2\n").unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].value(), "1");
    }

    #[test]
    fn test_secret_keys_mark_sensitive() {
        let secret_keys = SecretKeys::from_list("SECRET_KEY");
        let vars = parse_env_vars(
            "KEY=value\nSECRET_KEY=secret value",
            &secret_keys,
            &MapEnvironment::new(),
        )
        .unwrap();

        assert!(!vars[0].is_sensitive());
        assert!(vars[1].is_sensitive());
    }

    #[test]
    fn test_duplicate_keys_are_all_kept() {
        let vars = parse("A=1\nA=2").unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars[1].value(), "2");
    }

    proptest! {
        #[test]
        fn prop_one_record_per_defined_line(
            entries in prop::collection::vec(("[A-Z][A-Z0-9_]{0,8}", "[a-z0-9 =]{0,12}"), 0..10)
        ) {
            let input = entries
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("\n\n");

            let vars = parse(&input).unwrap();
            prop_assert_eq!(vars.len(), entries.len());
            for (var, (key, value)) in vars.iter().zip(&entries) {
                prop_assert_eq!(var.key(), key.as_str());
                prop_assert_eq!(var.value(), value.trim_end());
            }
        }
    }
}
