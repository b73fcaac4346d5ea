//! SQL generation for store listings.
//!
//! A listing is two statements sharing one filter predicate: the page query
//! (stores joined to their products, aggregated per store, ordered and
//! paginated) and the count query (stores alone, unpaginated). Filter values,
//! `LIMIT` and `OFFSET` are always bound as numbered parameters. Identifiers
//! come only from closed enums.

use skateshop_core::{SortDirection, StatusFilter, StoreSort};

use crate::validation::GetStoresInput;

/// A value bound to a numbered placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    BigInt(i64),
}

/// Generated SQL and its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub sql: String,
    pub params: Vec<BindValue>,
}

/// Builds the statements behind a store listing.
pub struct ListingSql;

impl ListingSql {
    /// The page query.
    #[must_use]
    pub fn page(input: &GetStoresInput) -> ListingQuery {
        let (where_clause, mut params) = Self::build_where_clause(input);
        let mut param_counter = params.len() + 1;

        let limit_param = format!("${param_counter}");
        params.push(BindValue::BigInt(input.limit));
        param_counter += 1;

        let offset_param = format!("${param_counter}");
        params.push(BindValue::BigInt(input.offset));

        let mut sql = String::from(
            "SELECT s.id, s.name, s.description, s.payment_account_id, \
             COUNT(p.id) AS product_count \
             FROM storefront.stores s \
             LEFT JOIN storefront.products p ON p.store_id = s.id",
        );
        if !where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&where_clause);
        }
        sql.push_str(" GROUP BY s.id ");
        sql.push_str(&Self::build_order_by(input.sort));
        sql.push_str(&format!(" LIMIT {limit_param} OFFSET {offset_param}"));

        ListingQuery { sql, params }
    }

    /// The count query: the same predicate, no join, no pagination.
    #[must_use]
    pub fn count(input: &GetStoresInput) -> ListingQuery {
        let (where_clause, params) = Self::build_where_clause(input);

        let mut sql = String::from("SELECT COUNT(*) FROM storefront.stores s");
        if !where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&where_clause);
        }

        ListingQuery { sql, params }
    }

    /// Build the shared WHERE clause. Placeholders start at `$1`.
    fn build_where_clause(input: &GetStoresInput) -> (String, Vec<BindValue>) {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(user_id) = &input.user_id {
            params.push(BindValue::Text(user_id.clone()));
            conditions.push(format!("s.user_id = ${}", params.len()));
        }

        match input.statuses {
            StatusFilter::ActiveOnly => {
                conditions.push("s.payment_account_id IS NOT NULL".to_string());
            }
            StatusFilter::InactiveOnly => {
                conditions.push("s.payment_account_id IS NULL".to_string());
            }
            StatusFilter::Any => {}
        }

        if conditions.is_empty() {
            (String::new(), params)
        } else {
            (format!("WHERE {}", conditions.join(" AND ")), params)
        }
    }

    /// Build the ORDER BY clause. Ties always break on ascending id.
    fn build_order_by(sort: StoreSort) -> String {
        let primary = match sort {
            StoreSort::Column(column, direction) => {
                format!("s.{} {}", column.column_name(), direction.to_sql())
            }
            StoreSort::ProductCount(direction) => {
                format!("COUNT(p.id) {}", direction.to_sql())
            }
        };

        format!("ORDER BY {primary}, s.id {}", SortDirection::Asc.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use skateshop_core::StoreColumn;

    use super::*;

    fn input() -> GetStoresInput {
        GetStoresInput::default()
    }

    #[test]
    fn test_default_page_query() {
        let query = ListingSql::page(&input());

        assert_eq!(
            query.sql,
            "SELECT s.id, s.name, s.description, s.payment_account_id, \
             COUNT(p.id) AS product_count \
             FROM storefront.stores s \
             LEFT JOIN storefront.products p ON p.store_id = s.id \
             GROUP BY s.id \
             ORDER BY s.created_at DESC, s.id ASC \
             LIMIT $1 OFFSET $2"
        );
        assert_eq!(query.params, [BindValue::BigInt(10), BindValue::BigInt(0)]);
    }

    #[test]
    fn test_default_count_query() {
        let query = ListingSql::count(&input());
        assert_eq!(query.sql, "SELECT COUNT(*) FROM storefront.stores s");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_user_filter_is_bound() {
        let input = GetStoresInput {
            user_id: Some("u1'; DROP TABLE stores; --".to_string()),
            ..input()
        };

        let page = ListingSql::page(&input);
        assert!(page.sql.contains("WHERE s.user_id = $1 GROUP BY"));
        assert!(page.sql.ends_with("LIMIT $2 OFFSET $3"));
        assert!(!page.sql.contains("DROP TABLE"));
        assert_eq!(
            page.params,
            [
                BindValue::Text("u1'; DROP TABLE stores; --".to_string()),
                BindValue::BigInt(10),
                BindValue::BigInt(0),
            ]
        );

        let count = ListingSql::count(&input);
        assert_eq!(
            count.sql,
            "SELECT COUNT(*) FROM storefront.stores s WHERE s.user_id = $1"
        );
        assert_eq!(count.params.len(), 1);
    }

    #[test]
    fn test_status_filters() {
        let active = GetStoresInput {
            statuses: StatusFilter::ActiveOnly,
            ..input()
        };
        assert_eq!(
            ListingSql::count(&active).sql,
            "SELECT COUNT(*) FROM storefront.stores s WHERE s.payment_account_id IS NOT NULL"
        );

        let inactive = GetStoresInput {
            statuses: StatusFilter::InactiveOnly,
            ..input()
        };
        assert_eq!(
            ListingSql::count(&inactive).sql,
            "SELECT COUNT(*) FROM storefront.stores s WHERE s.payment_account_id IS NULL"
        );
    }

    #[test]
    fn test_combined_filters() {
        let input = GetStoresInput {
            user_id: Some("u1".to_string()),
            statuses: StatusFilter::ActiveOnly,
            ..input()
        };
        assert_eq!(
            ListingSql::count(&input).sql,
            "SELECT COUNT(*) FROM storefront.stores s \
             WHERE s.user_id = $1 AND s.payment_account_id IS NOT NULL"
        );
    }

    #[test]
    fn test_page_and_count_share_predicate() {
        let input = GetStoresInput {
            user_id: Some("u1".to_string()),
            statuses: StatusFilter::InactiveOnly,
            limit: 3,
            offset: 6,
            ..input()
        };
        let page = ListingSql::page(&input);
        let count = ListingSql::count(&input);

        let predicate = "WHERE s.user_id = $1 AND s.payment_account_id IS NULL";
        assert!(page.sql.contains(predicate));
        assert!(count.sql.ends_with(predicate));
        assert_eq!(page.params[..1], count.params[..]);
        assert!(!count.sql.contains("LIMIT"));
        assert!(!count.sql.contains("JOIN"));
    }

    #[test]
    fn test_column_ordering() {
        let by_name = GetStoresInput {
            sort: StoreSort::Column(StoreColumn::Name, SortDirection::Asc),
            ..input()
        };
        assert!(
            ListingSql::page(&by_name)
                .sql
                .contains("ORDER BY s.name ASC, s.id ASC")
        );

        let by_account = GetStoresInput {
            sort: StoreSort::Column(StoreColumn::PaymentAccountId, SortDirection::Desc),
            ..input()
        };
        assert!(
            ListingSql::page(&by_account)
                .sql
                .contains("ORDER BY s.payment_account_id DESC, s.id ASC")
        );
    }

    #[test]
    fn test_product_count_ordering() {
        let input = GetStoresInput {
            sort: StoreSort::ProductCount(SortDirection::Desc),
            ..input()
        };
        assert!(
            ListingSql::page(&input)
                .sql
                .contains("ORDER BY COUNT(p.id) DESC, s.id ASC")
        );
    }

    #[test]
    fn test_pagination_params() {
        let input = GetStoresInput {
            limit: 2,
            offset: 40,
            ..input()
        };
        assert_eq!(
            ListingSql::page(&input).params,
            [BindValue::BigInt(2), BindValue::BigInt(40)]
        );
    }
}
