//! Command implementations

mod check;
mod rules;
#[cfg(feature = "scrape")]
mod scrape;
#[cfg(feature = "server")]
mod serve;

pub use check::check;
pub use rules::{regulations, rules};
#[cfg(feature = "scrape")]
pub use scrape::scrape;
#[cfg(feature = "server")]
pub use serve::serve;
