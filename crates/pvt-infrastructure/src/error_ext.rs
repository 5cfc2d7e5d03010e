//! Error extension utilities
//!
//! Context extension method for converting external errors into the
//! domain error type at the infrastructure boundary.
//!
//! # Example
//!
//! ```ignore
//! use pvt_infrastructure::error_ext::ErrorContext;
//!
//! let config: AppConfig = figment
//!     .extract()
//!     .context("Failed to extract configuration")?;
//! ```

use pvt_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context, converting the error into a configuration error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::config_with_source(context.to_string(), e))
    }
}
