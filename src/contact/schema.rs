//! Contact form validation schema
//!
//! Validation semantics:
//! - Every declared field is checked and every violation is reported
//! - Missing or null fields are `invalid_type` ("Required")
//! - Non-string values are `invalid_type`
//! - Undeclared fields are ignored
//!
//! The validator never mutates its input and never trims or normalizes.

use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::NewContactSubmission;
use crate::locale::{text, Locale, MessageKey};

/// Fields of a contact submission, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    ServiceType,
    Message,
}

impl Field {
    /// JSON key as sent by the form
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::ServiceType => "serviceType",
            Field::Message => "message",
        }
    }
}

/// A single constraint on a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    /// Minimum length in UTF-16 code units
    MinLength { value: usize },
    /// Plain `local@domain.tld` address: no display name, quoted local
    /// part, or domain literal
    Email,
}

/// Constraint bound to a field, with the message reported on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    pub message: MessageKey,
}

const RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        rule: Rule::MinLength { value: 2 },
        message: MessageKey::NameTooShort,
    },
    FieldRule {
        field: Field::Phone,
        rule: Rule::MinLength { value: 9 },
        message: MessageKey::PhoneTooShort,
    },
    FieldRule {
        field: Field::Email,
        rule: Rule::Email,
        message: MessageKey::EmailInvalid,
    },
    FieldRule {
        field: Field::ServiceType,
        rule: Rule::MinLength { value: 1 },
        message: MessageKey::ServiceTypeMissing,
    },
    FieldRule {
        field: Field::Message,
        rule: Rule::MinLength { value: 10 },
        message: MessageKey::MessageTooShort,
    },
];

/// Machine-readable violation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// Value missing, null, or not a string
    InvalidType,
    /// String shorter than the minimum length
    TooSmall,
    /// String does not match the required format
    InvalidString,
}

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Offending field; empty for the request body itself
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

/// Published form of a rule, served to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescription {
    pub field: &'static str,
    #[serde(flatten)]
    pub rule: Rule,
    pub message: &'static str,
}

/// The contact form schema, bound to the locale used for messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactSchema {
    locale: Locale,
}

impl ContactSchema {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The rule table, one entry per field
    pub fn rules() -> &'static [FieldRule] {
        &RULES
    }

    /// Rule table with messages resolved for this schema's locale
    pub fn describe(&self) -> Vec<RuleDescription> {
        Self::rules()
            .iter()
            .map(|r| RuleDescription {
                field: r.field.as_str(),
                rule: r.rule,
                message: text(r.message, self.locale),
            })
            .collect()
    }

    /// Validates an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in field order. The list is never empty.
    pub fn validate(&self, input: &Value) -> Result<NewContactSubmission, Vec<FieldViolation>> {
        let obj = match input.as_object() {
            Some(obj) => obj,
            None => {
                return Err(vec![self.type_violation(
                    "",
                    MessageKey::ExpectedObject,
                    input,
                )])
            }
        };

        let mut violations = Vec::new();
        let mut values: [Option<String>; 5] = Default::default();

        for (slot, rule) in values.iter_mut().zip(Self::rules()) {
            match self.check_field(obj, rule) {
                Ok(value) => *slot = Some(value),
                Err(violation) => violations.push(violation),
            }
        }

        // A missing slot always has a matching violation
        match values {
            [Some(name), Some(phone), Some(email), Some(service_type), Some(message)] => {
                Ok(NewContactSubmission {
                    name,
                    phone,
                    email,
                    service_type,
                    message,
                })
            }
            _ => Err(violations),
        }
    }

    fn check_field(
        &self,
        obj: &Map<String, Value>,
        rule: &FieldRule,
    ) -> Result<String, FieldViolation> {
        let field = rule.field.as_str();

        let value = match obj.get(field) {
            None | Some(Value::Null) => {
                return Err(FieldViolation {
                    field: field.to_string(),
                    code: ViolationCode::InvalidType,
                    message: text(MessageKey::Required, self.locale).to_string(),
                })
            }
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(self.type_violation(field, MessageKey::ExpectedString, other))
            }
        };

        let passes = match rule.rule {
            Rule::MinLength { value: min } => utf16_len(value) >= min,
            Rule::Email => is_plain_email(value),
        };

        if passes {
            Ok(value.clone())
        } else {
            Err(FieldViolation {
                field: field.to_string(),
                code: match rule.rule {
                    Rule::MinLength { .. } => ViolationCode::TooSmall,
                    Rule::Email => ViolationCode::InvalidString,
                },
                message: text(rule.message, self.locale).to_string(),
            })
        }
    }

    fn type_violation(&self, field: &str, key: MessageKey, actual: &Value) -> FieldViolation {
        FieldViolation {
            field: field.to_string(),
            code: ViolationCode::InvalidType,
            message: format!("{} {}", text(key, self.locale), json_type_name(actual)),
        }
    }
}

fn is_plain_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();

    match EmailAddress::parse_with_options(value, options) {
        Ok(address) => !address.local_part().starts_with('"'),
        Err(_) => false,
    }
}

/// Length as a browser reports it
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
