// ABOUTME: Unified error handling for the meal planner library and CLI
// ABOUTME: Defines ErrorCode, AppError, and conversions from catalog, config, and planning errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Library crates keep their own `thiserror` enums; this module folds them into
//! a single [`AppError`] carrying a stable [`ErrorCode`], so callers at the
//! edge (the CLI) can report and exit consistently.

pub use pierre_meal_core::errors::CatalogError;
pub use pierre_meal_engine::{ConfigError, PlanningError};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be understood
    InvalidInput = 3000,
    /// Input was understood but outside the accepted range
    ValueOutOfRange = 3003,
    /// Daily calorie total rejected as unsafe
    UnsafeCalories = 3004,

    // Resources (4000-4999)
    /// A referenced file or template does not exist
    ResourceNotFound = 4000,
    /// The meal catalog failed validation
    CatalogInvalid = 4001,

    // Configuration (6000-6999)
    /// Configuration could not be parsed
    ConfigError = 6000,
    /// Configuration parsed but failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// JSON serialization or deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange | Self::UnsafeCalories => 2,
            Self::ResourceNotFound | Self::CatalogInvalid => 3,
            Self::ConfigError | Self::ConfigInvalid => 4,
            Self::InternalError | Self::SerializationError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnsafeCalories => "The requested calorie intake is outside safe limits",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::CatalogInvalid => "The meal catalog is invalid",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        let code = match &error {
            CatalogError::Io(io_error) if io_error.kind() == io::ErrorKind::NotFound => {
                ErrorCode::ResourceNotFound
            }
            CatalogError::Io(_) => ErrorCode::InternalError,
            CatalogError::Parse(_) => ErrorCode::SerializationError,
            _ => ErrorCode::CatalogInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::Parse(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        Self::new(ErrorCode::UnsafeCalories, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        let code = if error.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::InternalError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
