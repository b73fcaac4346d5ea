//! Store status and status filters.
//!
//! A store's status is never stored. It is derived from whether the store has
//! an external payment account attached.

use serde::{Deserialize, Serialize};

/// Derived store status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    /// A payment account is attached; the store can take orders.
    Active,
    /// No payment account yet. Every new store starts here.
    #[default]
    Inactive,
}

impl StoreStatus {
    /// Token used for this status in `statuses` filter strings.
    pub const ACTIVE_TOKEN: &'static str = "active";
    /// Token used for this status in `statuses` filter strings.
    pub const INACTIVE_TOKEN: &'static str = "inactive";

    /// Derive the status from a store's payment account identifier.
    #[must_use]
    pub const fn from_payment_account(payment_account_id: Option<&str>) -> Self {
        match payment_account_id {
            Some(_) => Self::Active,
            None => Self::Inactive,
        }
    }

    /// The filter token for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => Self::ACTIVE_TOKEN,
            Self::Inactive => Self::INACTIVE_TOKEN,
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status restriction applied to a store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only stores with a payment account.
    ActiveOnly,
    /// Only stores without a payment account.
    InactiveOnly,
}

impl StatusFilter {
    /// Build the filter from a dot-delimited token string such as
    /// `"active"` or `"active.inactive"`.
    ///
    /// Asking for both statuses, or neither, applies no restriction.
    /// Unknown tokens are ignored.
    ///
    /// ```
    /// use skateshop_core::StatusFilter;
    ///
    /// assert_eq!(StatusFilter::from_tokens("active"), StatusFilter::ActiveOnly);
    /// assert_eq!(StatusFilter::from_tokens("inactive"), StatusFilter::InactiveOnly);
    /// assert_eq!(StatusFilter::from_tokens("active.inactive"), StatusFilter::Any);
    /// ```
    #[must_use]
    pub fn from_tokens(statuses: &str) -> Self {
        let mut active = false;
        let mut inactive = false;

        for token in statuses.split('.') {
            match token {
                StoreStatus::ACTIVE_TOKEN => active = true,
                StoreStatus::INACTIVE_TOKEN => inactive = true,
                _ => {}
            }
        }

        match (active, inactive) {
            (true, false) => Self::ActiveOnly,
            (false, true) => Self::InactiveOnly,
            _ => Self::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_payment_account() {
        assert_eq!(
            StoreStatus::from_payment_account(Some("acct_123")),
            StoreStatus::Active
        );
        assert_eq!(
            StoreStatus::from_payment_account(None),
            StoreStatus::Inactive
        );
    }

    #[test]
    fn test_new_store_default_is_inactive() {
        assert_eq!(StoreStatus::default(), StoreStatus::Inactive);
    }

    #[test]
    fn test_filter_single_tokens() {
        assert_eq!(StatusFilter::from_tokens("active"), StatusFilter::ActiveOnly);
        assert_eq!(
            StatusFilter::from_tokens("inactive"),
            StatusFilter::InactiveOnly
        );
    }

    #[test]
    fn test_filter_both_or_neither_is_any() {
        assert_eq!(StatusFilter::from_tokens("active.inactive"), StatusFilter::Any);
        assert_eq!(StatusFilter::from_tokens("inactive.active"), StatusFilter::Any);
        assert_eq!(StatusFilter::from_tokens(""), StatusFilter::Any);
    }

    #[test]
    fn test_filter_ignores_unknown_tokens() {
        assert_eq!(
            StatusFilter::from_tokens("archived.active"),
            StatusFilter::ActiveOnly
        );
        assert_eq!(StatusFilter::from_tokens("archived"), StatusFilter::Any);
    }

    #[test]
    fn test_filter_tokens_are_exact() {
        // Prefix matches don't count
        assert_eq!(StatusFilter::from_tokens("activeish"), StatusFilter::Any);
        assert_eq!(StatusFilter::from_tokens("Active"), StatusFilter::Any);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(StoreStatus::Active.to_string(), "active");
        assert_eq!(StoreStatus::Inactive.to_string(), "inactive");
    }
}
