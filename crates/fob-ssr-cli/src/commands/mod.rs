//! Command implementations for the fob-ssr CLI.
//!
//! - [`check`] - Decide individual specifiers
//! - [`externals`] - Print the legacy externals list

pub mod check;
pub mod externals;
pub mod utils;

pub use check::execute as check_execute;
pub use check::{Externalizer, should_externalize};
pub use externals::execute as externals_execute;
