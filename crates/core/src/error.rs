//! Error taxonomy for the analysis pipeline

use std::fmt;

/// Errors raised by ingestion, lookups, regressions and input parsing.
///
/// Only [`AnalysisError::InputValidation`] is meant to be recovered from
/// locally (the menu re-prompts). Everything else aborts the requested
/// operation, or session startup for [`AnalysisError::Ingestion`] and
/// [`AnalysisError::Config`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid menu choice, year or month name typed by the analyst
    InputValidation(String),
    /// Calendar key absent from the climate table or event catalog
    DataLookup(String),
    /// Fewer than two points, identical x-values, or a non-finite fit
    DegenerateRegression(String),
    /// Malformed day-count or clock string
    Parse(String),
    /// Dataset could not be read or has an impossible shape
    Ingestion(String),
    /// Configuration file unreadable or inconsistent
    Config(String),
}

impl AnalysisError {
    /// Short category name, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InputValidation(_) => "input_validation",
            AnalysisError::DataLookup(_) => "data_lookup",
            AnalysisError::DegenerateRegression(_) => "degenerate_regression",
            AnalysisError::Parse(_) => "parse",
            AnalysisError::Ingestion(_) => "ingestion",
            AnalysisError::Config(_) => "config",
        }
    }

    /// Whether the interactive menu should simply re-prompt
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::InputValidation(_))
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InputValidation(msg) => write!(f, "Invalid input: {msg}"),
            AnalysisError::DataLookup(msg) => write!(f, "No data: {msg}"),
            AnalysisError::DegenerateRegression(msg) => {
                write!(f, "Cannot fit regression: {msg}")
            }
            AnalysisError::Parse(msg) => write!(f, "Failed to parse: {msg}"),
            AnalysisError::Ingestion(msg) => write!(f, "Failed to load data: {msg}"),
            AnalysisError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
