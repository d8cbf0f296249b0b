//! Error types and handling for the Travel Guide planner

use thiserror::Error;

/// Main error type for the Travel Guide planner
#[derive(Error, Debug)]
pub enum TravelGuideError {
    /// The requested trip ends before it starts
    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    /// A budget tier string that is not one of the recognized tiers
    #[error("Unknown budget tier: '{value}'")]
    UnknownBudgetTier { value: String },

    /// The activity catalog contains no activities at all
    #[error("Activity catalog is empty")]
    EmptyCatalog,

    /// Catalog data could not be loaded or parsed
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TravelGuideError {
    /// Create a new invalid-date-range error
    pub fn invalid_date_range<S: Into<String>>(message: S) -> Self {
        Self::InvalidDateRange {
            message: message.into(),
        }
    }

    /// Create a new unknown-budget-tier error
    pub fn unknown_budget_tier<S: Into<String>>(value: S) -> Self {
        Self::UnknownBudgetTier {
            value: value.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message for the form layer
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelGuideError::InvalidDateRange { message } => {
                format!("Please check your travel dates: {message}")
            }
            TravelGuideError::UnknownBudgetTier { value } => {
                format!("'{value}' is not a recognized budget level. Choose low, medium or high.")
            }
            TravelGuideError::EmptyCatalog => {
                "No activities are available to plan with.".to_string()
            }
            TravelGuideError::Catalog { .. } => {
                "The activity catalog could not be loaded. Please check the catalog file."
                    .to_string()
            }
            TravelGuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}
