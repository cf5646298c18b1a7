use clap::ValueEnum;
use fob_ssr_config::SsrTarget;

/// Runtime the server bundle targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Node.js
    Node,
    /// Web worker style runtimes (edge functions, workers)
    Webworker,
}

impl From<Target> for SsrTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Node => SsrTarget::Node,
            Target::Webworker => SsrTarget::Webworker,
        }
    }
}
