//! Input validation for store actions.
//!
//! Action inputs arrive partially typed: JSON bodies from the API and query
//! strings from the dashboard. Each raw input holds loosely typed values and
//! is validated into a strongly typed input in one pass. Every failing field
//! is reported, not just the first.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use skateshop_core::{StatusFilter, StoreName, StoreSort};

/// Default page size for store listings.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum length of a store description.
pub const DESCRIPTION_MAX_LENGTH: usize = 255;

/// Maximum length of an owner id. Matches the `user_id` column width.
pub const USER_ID_MAX_LENGTH: usize = 191;

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Client-facing field name (`camelCase`).
    pub field: &'static str,
    /// Human readable message.
    pub message: String,
}

/// Input failed validation. Holds every failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", display_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldError>,
}

fn display_issues(issues: &[FieldError]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

impl ValidationError {
    /// Whether the given field failed.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Accumulates field errors while validating.
#[derive(Debug, Default)]
struct Issues(Vec<FieldError>);

impl Issues {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationError> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(ValidationError { issues: self.0 })
        }
    }
}

// =============================================================================
// Store listing input
// =============================================================================

/// Raw store listing parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGetStoresInput {
    #[serde(default)]
    pub limit: Option<Value>,
    #[serde(default)]
    pub offset: Option<Value>,
    #[serde(default)]
    pub sort: Option<Value>,
    #[serde(default)]
    pub statuses: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
}

/// Validated store listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetStoresInput {
    /// Page size, always positive.
    pub limit: i64,
    /// Rows to skip, never negative.
    pub offset: i64,
    /// Resolved ordering.
    pub sort: StoreSort,
    /// Status restriction.
    pub statuses: StatusFilter,
    /// Restrict to stores owned by this user.
    pub user_id: Option<String>,
}

impl Default for GetStoresInput {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: StoreSort::default(),
            statuses: StatusFilter::default(),
            user_id: None,
        }
    }
}

impl RawGetStoresInput {
    /// Validate into a [`GetStoresInput`], applying defaults for absent fields.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every invalid field.
    pub fn validate(&self) -> Result<GetStoresInput, ValidationError> {
        let mut issues = Issues::default();

        let limit = match present(self.limit.as_ref()) {
            None => DEFAULT_LIMIT,
            Some(value) => match integer(value) {
                Some(limit) if limit > 0 => limit,
                Some(_) => {
                    issues.push("limit", "limit must be greater than 0");
                    DEFAULT_LIMIT
                }
                None => {
                    issues.push("limit", "limit must be an integer");
                    DEFAULT_LIMIT
                }
            },
        };

        let offset = match present(self.offset.as_ref()) {
            None => 0,
            Some(value) => match integer(value) {
                Some(offset) if offset >= 0 => offset,
                Some(_) => {
                    issues.push("offset", "offset must be greater than or equal to 0");
                    0
                }
                None => {
                    issues.push("offset", "offset must be an integer");
                    0
                }
            },
        };

        let sort = match present(self.sort.as_ref()) {
            None => None,
            Some(Value::String(sort)) if !sort.is_empty() => Some(sort.as_str()),
            Some(Value::String(_)) => {
                issues.push("sort", "sort must not be empty");
                None
            }
            Some(_) => {
                issues.push("sort", "sort must be a string");
                None
            }
        };

        let statuses = match present(self.statuses.as_ref()) {
            None => StatusFilter::Any,
            Some(Value::String(statuses)) => StatusFilter::from_tokens(statuses),
            Some(_) => {
                issues.push("statuses", "statuses must be a string");
                StatusFilter::Any
            }
        };

        let user_id = optional_user_id(self.user_id.as_ref(), &mut issues);

        issues.finish(|| GetStoresInput {
            limit,
            offset,
            sort: StoreSort::parse(sort),
            statuses,
            user_id,
        })
    }
}

// =============================================================================
// Store creation input
// =============================================================================

/// Raw store creation payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateStoreInput {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
}

/// Validated store creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStoreInput {
    pub name: StoreName,
    pub description: Option<String>,
    pub user_id: String,
}

impl RawCreateStoreInput {
    /// Convenience constructor for callers that already hold typed values.
    #[must_use]
    pub fn new(name: &str, description: Option<&str>, user_id: &str) -> Self {
        Self {
            name: Some(Value::from(name)),
            description: description.map(Value::from),
            user_id: Some(Value::from(user_id)),
        }
    }

    /// Validate into a [`CreateStoreInput`].
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every invalid field.
    pub fn validate(&self) -> Result<CreateStoreInput, ValidationError> {
        let mut issues = Issues::default();

        let name = match present(self.name.as_ref()) {
            None => {
                issues.push("name", "name is required");
                None
            }
            Some(Value::String(name)) => match StoreName::parse(name) {
                Ok(name) => Some(name),
                Err(e) => {
                    issues.push("name", e.to_string());
                    None
                }
            },
            Some(_) => {
                issues.push("name", "name must be a string");
                None
            }
        };

        let description = match present(self.description.as_ref()) {
            None => None,
            Some(Value::String(description))
                if description.chars().count() > DESCRIPTION_MAX_LENGTH =>
            {
                issues.push(
                    "description",
                    format!("description must be at most {DESCRIPTION_MAX_LENGTH} characters"),
                );
                None
            }
            Some(Value::String(description)) => Some(description.clone()),
            Some(_) => {
                issues.push("description", "description must be a string");
                None
            }
        };

        let user_id = match optional_user_id(self.user_id.as_ref(), &mut issues) {
            Some(user_id) => Some(user_id),
            None if !issues.0.iter().any(|issue| issue.field == "userId") => {
                issues.push("userId", "userId is required");
                None
            }
            None => None,
        };

        match (name, user_id) {
            (Some(name), Some(user_id)) => issues.finish(|| CreateStoreInput {
                name,
                description,
                user_id,
            }),
            _ => Err(ValidationError { issues: issues.0 }),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Treat JSON `null` the same as an absent field.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Integer from a JSON number, or from a string holding one.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn optional_user_id(value: Option<&Value>, issues: &mut Issues) -> Option<String> {
    match present(value) {
        None => None,
        Some(Value::String(user_id)) if user_id.is_empty() => {
            issues.push("userId", "userId must not be empty");
            None
        }
        Some(Value::String(user_id)) if user_id.chars().count() > USER_ID_MAX_LENGTH => {
            issues.push(
                "userId",
                format!("userId must be at most {USER_ID_MAX_LENGTH} characters"),
            );
            None
        }
        Some(Value::String(user_id)) => Some(user_id.clone()),
        Some(_) => {
            issues.push("userId", "userId must be a string");
            None
        }
    }
}
