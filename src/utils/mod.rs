//! Utility functions
//!
//! Provides logging setup.

#[cfg(test)]
pub(crate) mod capture;
pub mod logging;
