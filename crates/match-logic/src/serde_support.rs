// match-logic/src/serde_support.rs
// ============================================================================
// Module: Outcome Serde Support
// Description: Serde helpers for verdict and inspection serialization.
// Purpose: Provide error models, configuration, and outcome validation helpers.
// Dependencies: serde::{Deserialize, Serialize}, std::fmt
// ============================================================================

//! ## Overview
//! Strongly typed serde helpers give deterministic serialization and
//! deserialization outcomes for verdicts and inspection results. Security
//! posture: deserialized outcomes are untrusted; validate and fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::QuantifierError;
use crate::quantifier::InspectionDecision;
use crate::quantifier::InspectionOutcome;
use crate::verdict::Verdict;
use crate::verdict::VerdictMessages;

// ============================================================================
// SECTION: Serde Errors
// ============================================================================

/// Error types raised while serializing or deserializing outcomes
///
/// # Invariants
/// - None. Variants capture structured validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerdeError {
    /// The payload failed to parse or serialize
    InvalidStructure(String),

    /// A message field was empty where the configuration forbids it
    EmptyMessage {
        /// Name of the offending message field
        field: &'static str,
    },

    /// A message exceeded the configured byte limit
    MessageTooLong {
        /// Maximum allowed bytes
        max_bytes: usize,
        /// Actual message size in bytes
        actual_bytes: usize,
    },

    /// An inspection outcome carried an ill-formed quantifier
    InvalidQuantifier(QuantifierError),

    /// An inspection outcome carried inconsistent counters
    InvalidCounts {
        /// Number of satisfied elements recorded
        satisfied: usize,
        /// Number of evaluated elements recorded
        evaluated: usize,
        /// Total elements recorded
        total: usize,
    },
}

// ============================================================================
// SECTION: Display Implementation
// ============================================================================

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStructure(msg) => {
                write!(f, "Invalid outcome structure: {msg}")
            }
            Self::EmptyMessage {
                field,
            } => write!(f, "Empty message field: {field}"),
            Self::MessageTooLong {
                max_bytes,
                actual_bytes,
            } => {
                write!(f, "Message exceeds size limit: {actual_bytes} bytes (max {max_bytes})")
            }
            Self::InvalidQuantifier(error) => {
                write!(f, "Invalid quantifier in outcome: {error}")
            }
            Self::InvalidCounts {
                satisfied,
                evaluated,
                total,
            } => {
                write!(
                    f,
                    "Inconsistent inspection counts: satisfied {satisfied}, evaluated \
                     {evaluated}, total {total}"
                )
            }
        }
    }
}

impl std::error::Error for SerdeError {}

impl From<QuantifierError> for SerdeError {
    fn from(error: QuantifierError) -> Self {
        Self::InvalidQuantifier(error)
    }
}

// ============================================================================
// SECTION: Serde Configuration
// ============================================================================

/// Configuration for outcome serialization and deserialization
///
/// # Invariants
/// - No invariants are enforced; callers should choose safe bounds.
#[derive(Debug, Clone)]
pub struct SerdeConfig {
    /// Maximum allowed size for a single message in bytes
    pub max_message_bytes: usize,

    /// Whether to validate outcomes during deserialization
    pub validate_on_deserialize: bool,

    /// Whether to allow empty message fields
    pub allow_empty_messages: bool,
}

// ============================================================================
// SECTION: Configuration Defaults
// ============================================================================

impl Default for SerdeConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 64 * 1024,
            validate_on_deserialize: true,
            allow_empty_messages: false,
        }
    }
}

// ============================================================================
// SECTION: Outcome Validator
// ============================================================================

/// Validator for verdicts and inspection outcomes
///
/// # Invariants
/// - Uses the stored [`SerdeConfig`] for all validation decisions.
#[derive(Debug)]
pub struct OutcomeValidator {
    /// Validation configuration for message and structure limits.
    config: SerdeConfig,
}

// ============================================================================
// SECTION: Validation Methods
// ============================================================================

impl OutcomeValidator {
    /// Creates a new validator with the given configuration
    #[must_use]
    pub const fn new(config: SerdeConfig) -> Self {
        Self {
            config,
        }
    }

    /// Creates a validator with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: SerdeConfig::default(),
        }
    }

    /// Validates a verdict's message set
    ///
    /// # Errors
    /// Returns [`SerdeError`] when a message is empty (and the configuration
    /// forbids empties) or exceeds the configured byte limit.
    pub fn validate_verdict(&self, verdict: &Verdict) -> Result<(), SerdeError> {
        self.validate_messages(&verdict.messages)
    }

    /// Validates an inspection outcome
    ///
    /// Checks the quantifier, the counter arithmetic, the offender/decision
    /// consistency, and every offender verdict's messages.
    ///
    /// # Errors
    /// Returns [`SerdeError`] when any structural rule is violated.
    pub fn validate_inspection(&self, outcome: &InspectionOutcome) -> Result<(), SerdeError> {
        outcome.quantifier.validate()?;

        let counts = outcome.counts;
        if counts.satisfied > counts.evaluated || counts.evaluated > counts.total {
            return Err(SerdeError::InvalidCounts {
                satisfied: counts.satisfied,
                evaluated: counts.evaluated,
                total: counts.total,
            });
        }

        if matches!(outcome.decision, InspectionDecision::Passed) && !outcome.offenders.is_empty()
        {
            return Err(SerdeError::InvalidStructure(
                "Passed inspection must not carry offenders".to_string(),
            ));
        }

        for element in &outcome.offenders {
            if element.index >= counts.total {
                return Err(SerdeError::InvalidStructure(format!(
                    "Offender index {} out of range for {} elements",
                    element.index, counts.total
                )));
            }
            self.validate_messages(&element.verdict.messages)?;
        }

        Ok(())
    }

    /// Validates a single message set against the configured limits
    fn validate_messages(&self, messages: &VerdictMessages) -> Result<(), SerdeError> {
        let fields = [
            ("failure", &messages.failure),
            ("negated_failure", &messages.negated_failure),
            ("mid_sentence_failure", &messages.mid_sentence_failure),
            ("mid_sentence_negated_failure", &messages.mid_sentence_negated_failure),
        ];

        for (field, message) in fields {
            if message.is_empty() && !self.config.allow_empty_messages {
                return Err(SerdeError::EmptyMessage {
                    field,
                });
            }
            if message.len() > self.config.max_message_bytes {
                return Err(SerdeError::MessageTooLong {
                    max_bytes: self.config.max_message_bytes,
                    actual_bytes: message.len(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// SECTION: Validated Outcomes
// ============================================================================

/// Outcome types that know how to validate themselves
///
/// Implemented for [`Verdict`] and [`InspectionOutcome`] so the serializer
/// can treat both uniformly.
pub trait ValidatedOutcome {
    /// Validates this outcome against the given validator
    ///
    /// # Errors
    /// Returns [`SerdeError`] when the outcome violates structural limits.
    fn validate_against(&self, validator: &OutcomeValidator) -> Result<(), SerdeError>;
}

impl ValidatedOutcome for Verdict {
    fn validate_against(&self, validator: &OutcomeValidator) -> Result<(), SerdeError> {
        validator.validate_verdict(self)
    }
}

impl ValidatedOutcome for InspectionOutcome {
    fn validate_against(&self, validator: &OutcomeValidator) -> Result<(), SerdeError> {
        validator.validate_inspection(self)
    }
}

// ============================================================================
// SECTION: Outcome Serializer
// ============================================================================

/// Helper for serializing outcomes with validation
///
/// # Invariants
/// - Uses the stored [`OutcomeValidator`] for structural checks.
#[derive(Debug)]
pub struct OutcomeSerializer {
    /// Validator used to enforce structural limits.
    validator: OutcomeValidator,
}

impl OutcomeSerializer {
    /// Creates a new serializer with the given configuration
    #[must_use]
    pub const fn new(config: SerdeConfig) -> Self {
        Self {
            validator: OutcomeValidator::new(config),
        }
    }

    /// Creates a serializer with default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            validator: OutcomeValidator::with_defaults(),
        }
    }

    /// Serializes an outcome to RON format with validation
    ///
    /// RON is the preferred format for golden files checked into test suites
    /// because diffs stay readable.
    ///
    /// # Errors
    /// Returns [`SerdeError`] if validation fails or serialization fails.
    pub fn to_ron<O>(&self, outcome: &O) -> Result<String, SerdeError>
    where
        O: ValidatedOutcome + Serialize,
    {
        if self.validator.config.validate_on_deserialize {
            outcome.validate_against(&self.validator)?;
        }

        ron::ser::to_string_pretty(outcome, ron::ser::PrettyConfig::default())
            .map_err(|e| SerdeError::InvalidStructure(e.to_string()))
    }

    /// Deserializes an outcome from RON format with validation
    ///
    /// # Errors
    /// Returns [`SerdeError`] if parsing fails or validation fails.
    pub fn from_ron<O>(&self, ron_str: &str) -> Result<O, SerdeError>
    where
        O: ValidatedOutcome + for<'de> Deserialize<'de>,
    {
        let outcome: O =
            ron::from_str(ron_str).map_err(|e| SerdeError::InvalidStructure(e.to_string()))?;

        if self.validator.config.validate_on_deserialize {
            outcome.validate_against(&self.validator)?;
        }

        Ok(outcome)
    }

    /// Serializes an outcome to JSON format with validation
    ///
    /// JSON serialization is provided for compatibility with external report
    /// tooling. RON is preferred for golden files.
    ///
    /// # Errors
    /// Returns [`SerdeError`] if validation fails or serialization fails.
    pub fn to_json<O>(&self, outcome: &O) -> Result<String, SerdeError>
    where
        O: ValidatedOutcome + Serialize,
    {
        if self.validator.config.validate_on_deserialize {
            outcome.validate_against(&self.validator)?;
        }

        serde_json::to_string_pretty(outcome)
            .map_err(|e| SerdeError::InvalidStructure(e.to_string()))
    }

    /// Deserializes an outcome from JSON format with validation
    ///
    /// # Errors
    /// Returns [`SerdeError`] if parsing fails or validation fails.
    pub fn from_json<O>(&self, json_str: &str) -> Result<O, SerdeError>
    where
        O: ValidatedOutcome + for<'de> Deserialize<'de>,
    {
        let outcome: O = serde_json::from_str(json_str)
            .map_err(|e| SerdeError::InvalidStructure(e.to_string()))?;

        if self.validator.config.validate_on_deserialize {
            outcome.validate_against(&self.validator)?;
        }

        Ok(outcome)
    }

    /// Validates an outcome without serialization
    ///
    /// # Errors
    /// Returns [`SerdeError`] when the outcome violates structural limits.
    pub fn validate<O>(&self, outcome: &O) -> Result<(), SerdeError>
    where
        O: ValidatedOutcome,
    {
        outcome.validate_against(&self.validator)
    }
}

impl Default for OutcomeSerializer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Convenience functions for serialization without explicit serializer
///
/// These functions use default configuration and are suitable for most use
/// cases. For custom limits, create an `OutcomeSerializer` explicitly.
pub mod convenience {
    use super::Deserialize;
    use super::OutcomeSerializer;
    use super::OutcomeValidator;
    use super::SerdeError;
    use super::Serialize;
    use super::ValidatedOutcome;

    /// Serialize an outcome to RON with default configuration
    ///
    /// # Errors
    /// Returns [`SerdeError`] if serialization fails or validation fails.
    pub fn to_ron<O: ValidatedOutcome + Serialize>(outcome: &O) -> Result<String, SerdeError> {
        OutcomeSerializer::default().to_ron(outcome)
    }

    /// Deserialize an outcome from RON with default configuration
    ///
    /// # Errors
    /// Returns [`SerdeError`] if parsing fails or validation fails.
    pub fn from_ron<O: ValidatedOutcome + for<'de> Deserialize<'de>>(
        ron_str: &str,
    ) -> Result<O, SerdeError> {
        OutcomeSerializer::default().from_ron(ron_str)
    }

    /// Serialize an outcome to JSON with default configuration
    ///
    /// # Errors
    /// Returns [`SerdeError`] if serialization fails or validation fails.
    pub fn to_json<O: ValidatedOutcome + Serialize>(outcome: &O) -> Result<String, SerdeError> {
        OutcomeSerializer::default().to_json(outcome)
    }

    /// Deserialize an outcome from JSON with default configuration
    ///
    /// # Errors
    /// Returns [`SerdeError`] if parsing fails or validation fails.
    pub fn from_json<O: ValidatedOutcome + for<'de> Deserialize<'de>>(
        json_str: &str,
    ) -> Result<O, SerdeError> {
        OutcomeSerializer::default().from_json(json_str)
    }

    /// Validate an outcome with default configuration
    ///
    /// # Errors
    /// Returns [`SerdeError`] when the outcome violates structural limits.
    pub fn validate<O: ValidatedOutcome>(outcome: &O) -> Result<(), SerdeError> {
        outcome.validate_against(&OutcomeValidator::with_defaults())
    }

    /// Quick validation check that returns a boolean
    ///
    /// Useful for simple validity checks where error details aren't needed.
    pub fn is_valid<O: ValidatedOutcome>(outcome: &O) -> bool {
        validate(outcome).is_ok()
    }
}
