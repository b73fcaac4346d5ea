//! Sort keys for store listings.
//!
//! Sort requests arrive as `"<field>.<direction>"` strings. They resolve to a
//! closed set of orderings; nothing here looks fields up by name at runtime.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse a direction token. Anything other than `"asc"` is descending.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// SQL keyword for this direction.
    #[must_use]
    pub const fn to_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sortable columns of the `stores` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreColumn {
    Id,
    Name,
    Description,
    UserId,
    Slug,
    PaymentAccountId,
    CreatedAt,
}

impl StoreColumn {
    /// Every sortable column.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::Description,
        Self::UserId,
        Self::Slug,
        Self::PaymentAccountId,
        Self::CreatedAt,
    ];

    /// Resolve a client-facing field key (`camelCase`) to a column.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }

    /// Client-facing field key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::UserId => "userId",
            Self::Slug => "slug",
            Self::PaymentAccountId => "paymentAccountId",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Database column name.
    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Description => "description",
            Self::UserId => "user_id",
            Self::Slug => "slug",
            Self::PaymentAccountId => "payment_account_id",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Resolved ordering of a store listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSort {
    /// Order by a stored column.
    Column(StoreColumn, SortDirection),
    /// Order by the per-store product count aggregate.
    ProductCount(SortDirection),
}

impl Default for StoreSort {
    /// Newest stores first.
    fn default() -> Self {
        Self::Column(StoreColumn::CreatedAt, SortDirection::Desc)
    }
}

impl StoreSort {
    /// Key of the product count aggregate in sort strings.
    pub const PRODUCT_COUNT_KEY: &'static str = "productCount";

    /// Resolve a sort string. First match wins:
    ///
    /// 1. exactly `paymentAccountId.asc` / `paymentAccountId.desc`
    /// 2. exactly `productCount.asc` / `productCount.desc`
    /// 3. `<column>.<direction>` for any [`StoreColumn`] key; a direction other
    ///    than `asc` means descending
    /// 4. the default ordering (`createdAt` descending)
    ///
    /// ```
    /// use skateshop_core::{SortDirection, StoreColumn, StoreSort};
    ///
    /// assert_eq!(
    ///     StoreSort::parse(Some("name.asc")),
    ///     StoreSort::Column(StoreColumn::Name, SortDirection::Asc)
    /// );
    /// assert_eq!(
    ///     StoreSort::parse(Some("productCount.desc")),
    ///     StoreSort::ProductCount(SortDirection::Desc)
    /// );
    /// assert_eq!(StoreSort::parse(Some("invalidfield.asc")), StoreSort::default());
    /// ```
    #[must_use]
    pub fn parse(sort: Option<&str>) -> Self {
        let Some(sort) = sort else {
            return Self::default();
        };

        match sort {
            "paymentAccountId.asc" => {
                return Self::Column(StoreColumn::PaymentAccountId, SortDirection::Asc);
            }
            "paymentAccountId.desc" => {
                return Self::Column(StoreColumn::PaymentAccountId, SortDirection::Desc);
            }
            "productCount.asc" => return Self::ProductCount(SortDirection::Asc),
            "productCount.desc" => return Self::ProductCount(SortDirection::Desc),
            _ => {}
        }

        let (field, direction) = match sort.split_once('.') {
            Some((field, direction)) => (field, Some(direction)),
            None => (sort, None),
        };

        StoreColumn::from_key(field).map_or_else(Self::default, |column| {
            Self::Column(column, SortDirection::from_token(direction))
        })
    }

    /// Direction of this ordering.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        match self {
            Self::Column(_, direction) | Self::ProductCount(direction) => *direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sort_is_default() {
        assert_eq!(
            StoreSort::parse(None),
            StoreSort::Column(StoreColumn::CreatedAt, SortDirection::Desc)
        );
    }

    #[test]
    fn test_payment_account_exact_tokens() {
        assert_eq!(
            StoreSort::parse(Some("paymentAccountId.asc")),
            StoreSort::Column(StoreColumn::PaymentAccountId, SortDirection::Asc)
        );
        assert_eq!(
            StoreSort::parse(Some("paymentAccountId.desc")),
            StoreSort::Column(StoreColumn::PaymentAccountId, SortDirection::Desc)
        );
    }

    #[test]
    fn test_payment_account_with_odd_direction_is_descending_column() {
        // Not an exact token, but still a real column
        assert_eq!(
            StoreSort::parse(Some("paymentAccountId.sideways")),
            StoreSort::Column(StoreColumn::PaymentAccountId, SortDirection::Desc)
        );
    }

    #[test]
    fn test_product_count_exact_tokens() {
        assert_eq!(
            StoreSort::parse(Some("productCount.asc")),
            StoreSort::ProductCount(SortDirection::Asc)
        );
        assert_eq!(
            StoreSort::parse(Some("productCount.desc")),
            StoreSort::ProductCount(SortDirection::Desc)
        );
    }

    #[test]
    fn test_product_count_with_odd_direction_falls_back() {
        // productCount is an aggregate, not a column, so only exact tokens match
        assert_eq!(StoreSort::parse(Some("productCount.up")), StoreSort::default());
        assert_eq!(StoreSort::parse(Some("productCount")), StoreSort::default());
    }

    #[test]
    fn test_column_sorts() {
        assert_eq!(
            StoreSort::parse(Some("name.asc")),
            StoreSort::Column(StoreColumn::Name, SortDirection::Asc)
        );
        assert_eq!(
            StoreSort::parse(Some("name.desc")),
            StoreSort::Column(StoreColumn::Name, SortDirection::Desc)
        );
        assert_eq!(
            StoreSort::parse(Some("createdAt.asc")),
            StoreSort::Column(StoreColumn::CreatedAt, SortDirection::Asc)
        );
        assert_eq!(
            StoreSort::parse(Some("userId.asc")),
            StoreSort::Column(StoreColumn::UserId, SortDirection::Asc)
        );
    }

    #[test]
    fn test_unrecognized_direction_is_descending() {
        assert_eq!(
            StoreSort::parse(Some("name.ASC")),
            StoreSort::Column(StoreColumn::Name, SortDirection::Desc)
        );
        assert_eq!(
            StoreSort::parse(Some("name")),
            StoreSort::Column(StoreColumn::Name, SortDirection::Desc)
        );
    }

    #[test]
    fn test_splits_on_first_dot_only() {
        assert_eq!(
            StoreSort::parse(Some("name.asc.extra")),
            StoreSort::Column(StoreColumn::Name, SortDirection::Desc)
        );
    }

    #[test]
    fn test_unknown_field_falls_back_to_newest_first() {
        assert_eq!(
            StoreSort::parse(Some("invalidfield.asc")),
            StoreSort::Column(StoreColumn::CreatedAt, SortDirection::Desc)
        );
        // Database column names are not client keys
        assert_eq!(StoreSort::parse(Some("created_at.asc")), StoreSort::default());
    }

    #[test]
    fn test_column_keys_round_trip() {
        for column in StoreColumn::ALL {
            assert_eq!(StoreColumn::from_key(column.key()), Some(column));
        }
    }

    #[test]
    fn test_direction_sql() {
        assert_eq!(SortDirection::Asc.to_sql(), "ASC");
        assert_eq!(SortDirection::Desc.to_sql(), "DESC");
        assert_eq!(StoreSort::default().direction(), SortDirection::Desc);
    }
}
