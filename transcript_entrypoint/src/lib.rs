#![deny(missing_docs)]
//! Standardized process initialization for the transcript ingest binaries.
//! Loads a local `.env`, installs the panic hook and picks the tracing subscriber for the
//! current [Environment].

mod environment;

pub use environment::{ENVIRONMENT_VAR, Environment, EnvironmentErr, UnknownValue};

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};
use tracing_tree::HierarchicalLayer;

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct TranscriptEntrypoint {
    env: Environment,
    /// describes options that only apply in local dev
    local: LocalOptions,
}

impl Default for TranscriptEntrypoint {
    fn default() -> Self {
        TranscriptEntrypoint {
            env: Environment::new_or_prod(),
            local: Default::default(),
        }
    }
}

/// sentinel struct which guarantees that we called [TranscriptEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// the environment the subscriber was configured for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl TranscriptEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            local: Default::default(),
        }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match (self.env, self.local) {
            (Environment::Local, LocalOptions { tree_tracing: None }) => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            (
                Environment::Local,
                LocalOptions {
                    tree_tracing: Some(level),
                },
            ) => {
                let subscriber = Registry::default()
                    .with(EnvFilter::from_default_env())
                    .with(HierarchicalLayer::new(level));
                if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
                    eprintln!("unable to install tree tracing subscriber: {e}");
                }
            }
            (Environment::Production | Environment::Develop, _) => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment=%self.env, "entrypoint initialized");

        InitializedEntrypoint { env: self.env }
    }

    /// begin modifying the options for the local environment
    pub fn local(self) -> LocalOptionsBuilder {
        LocalOptionsBuilder {
            prev: self,
            next: Default::default(),
        }
    }
}

/// builder struct for modifying the local environment options
pub struct LocalOptionsBuilder {
    prev: TranscriptEntrypoint,
    next: LocalOptions,
}

impl LocalOptionsBuilder {
    /// render spans as an indented tree with the given indent width
    pub fn tree_tracing(mut self, val: Option<usize>) -> Self {
        self.next.tree_tracing = val;
        self
    }

    /// finish modifying the options for the local environment
    pub fn build(self) -> TranscriptEntrypoint {
        TranscriptEntrypoint {
            env: self.prev.env,
            local: self.next,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct LocalOptions {
    tree_tracing: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builder_keeps_environment() {
        let entrypoint = TranscriptEntrypoint::new(Environment::Local)
            .local()
            .tree_tracing(Some(2))
            .build();

        assert_eq!(entrypoint.env, Environment::Local);
        assert_eq!(entrypoint.local.tree_tracing, Some(2));
    }

    #[test]
    fn new_has_no_tree_tracing() {
        let entrypoint = TranscriptEntrypoint::new(Environment::Develop);
        assert_eq!(entrypoint.local.tree_tracing, None);
    }
}
