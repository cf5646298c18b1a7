//! Global settings shared by every fob SSR tool.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log level (`silent`, `error`, `warn`, `info`, `debug`)
    #[serde(default)]
    pub log_level: Option<String>,
}
