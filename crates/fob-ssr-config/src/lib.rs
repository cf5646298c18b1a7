//! Configuration for fob's SSR dependency externalization.
//!
//! The on-disk surface is a `fob.toml` file (or a `fob` object inside
//! `package.json`) with `root`, `[resolve]`, `[ssr]` and `[settings]` sections.
//! Values are layered with [figment]: defaults, then the discovered file, then
//! `FOB_`-prefixed environment variables.

pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod ssr;
pub mod validation;

pub use config::*;
pub use error::*;
pub use settings::*;
pub use ssr::*;

pub use discovery::ConfigDiscovery;
pub use validation::{ConfigValidator, FsValidator, SchemaValidator};
