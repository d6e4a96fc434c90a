//! Navigation configuration errors
//!
//! A route that does not exist is always a programming or configuration
//! fault, so these are surfaced to the caller instead of being ignored.

use thiserror::Error;

/// Errors raised by the tab navigator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("navigator has no routes")]
    NoRoutes,

    #[error("route '{0}' is declared more than once")]
    DuplicateRoute(String),

    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("initial route '{0}' is not a declared route")]
    UnknownInitialRoute(String),
}
