use anyhow::Context;
pub use transcript_entrypoint::Environment;

const DEFAULT_TRANSCRIPT_BUCKET_REGION: &str = "us-east-1";

/// Indent width of the hierarchical span output, only honoured in the local environment
const TRACING_TREE_INDENT_VAR: &str = "TRACING_TREE_INDENT";

#[derive(Debug, Clone)]
pub struct Config {
    /// The dynamodb table holding the contact trace records
    pub contact_trace_table: String,

    /// The region the s3 client is built for
    pub transcript_bucket_region: String,

    /// The environment we are in, as resolved by the entrypoint
    pub environment: Environment,
}

impl Config {
    pub fn from_env(environment: Environment) -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok(), environment)
    }

    fn from_vars(
        lookup: impl Fn(&str) -> Option<String>,
        environment: Environment,
    ) -> anyhow::Result<Self> {
        let contact_trace_table = lookup("CONTACT_TRACE_TABLE")
            .filter(|table| !table.is_empty())
            .context("CONTACT_TRACE_TABLE must be provided")?;

        let transcript_bucket_region = lookup("TRANSCRIPT_BUCKET_REGION")
            .unwrap_or_else(|| DEFAULT_TRANSCRIPT_BUCKET_REGION.to_string());

        Ok(Config {
            contact_trace_table,
            transcript_bucket_region,
            environment,
        })
    }
}

/// Read before the subscriber is installed, so this cannot go through [Config]
pub fn tree_tracing_indent() -> Option<usize> {
    tree_tracing_indent_from(|name| std::env::var(name).ok())
}

fn tree_tracing_indent_from(lookup: impl Fn(&str) -> Option<String>) -> Option<usize> {
    lookup(TRACING_TREE_INDENT_VAR).and_then(|indent| indent.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn table_is_required() {
        let err = Config::from_vars(vars(&[]), Environment::Production).unwrap_err();
        assert!(err.to_string().contains("CONTACT_TRACE_TABLE"));

        assert!(
            Config::from_vars(vars(&[("CONTACT_TRACE_TABLE", "")]), Environment::Production)
                .is_err()
        );
    }

    #[test]
    fn region_falls_back() {
        let config =
            Config::from_vars(vars(&[("CONTACT_TRACE_TABLE", "ctr")]), Environment::Local).unwrap();

        assert_eq!(config.contact_trace_table, "ctr");
        assert_eq!(config.transcript_bucket_region, "us-east-1");
        assert_eq!(config.environment, Environment::Local);
    }

    #[test]
    fn environment_comes_from_the_caller() {
        let config = Config::from_vars(
            vars(&[
                ("CONTACT_TRACE_TABLE", "ctr"),
                ("TRANSCRIPT_BUCKET_REGION", "eu-west-1"),
                ("ENVIRONMENT", "local"),
            ]),
            Environment::Develop,
        )
        .unwrap();

        assert_eq!(config.transcript_bucket_region, "eu-west-1");
        assert_eq!(config.environment, Environment::Develop);
    }

    #[test]
    fn tree_tracing_indent_is_parsed() {
        assert_eq!(tree_tracing_indent_from(vars(&[])), None);
        assert_eq!(
            tree_tracing_indent_from(vars(&[("TRACING_TREE_INDENT", "2")])),
            Some(2)
        );
        assert_eq!(
            tree_tracing_indent_from(vars(&[("TRACING_TREE_INDENT", "wide")])),
            None
        );
    }
}
