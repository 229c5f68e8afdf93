//! Endpoints still to be moved onto the multi-trip API surface.
//!
//! Every request on these routes must carry `tripCode` once migrated.

use endpoint_lister_common::{EndpointGroup, EndpointRecord, HttpMethod};

use EndpointGroup::{Budget, Contributions, Expenses, Members};
use HttpMethod::{Delete, Post};

/// Remaining endpoints, in migration order.
#[rustfmt::skip]
pub const ENDPOINTS: &[EndpointRecord] = &[
    // Contribution
    EndpointRecord::new(Contributions, Post, "/api/contributions/request", &["tripCode", "memberId", "amount", "memberName"]),
    EndpointRecord::new(Contributions, Post, "/api/contributions/approve", &["tripCode", "id", "action"]),
    EndpointRecord::new(Contributions, Delete, "/api/contributions/request/:id", &["tripCode", "id"]),
    // Expense
    EndpointRecord::new(Expenses, Post, "/api/expenses", &["tripCode", "expense"]),
    EndpointRecord::new(Expenses, Post, "/api/expenses/request", &["tripCode", "expense"]),
    EndpointRecord::new(Expenses, Post, "/api/expenses/approve", &["tripCode", "id", "action"]),
    EndpointRecord::new(Expenses, Delete, "/api/expenses/:id", &["tripCode", "id"]),
    // Member approval/delete
    EndpointRecord::new(Members, Post, "/api/members/approve", &["tripCode", "id", "action", "details"]),
    EndpointRecord::new(Members, Delete, "/api/members/:id", &["tripCode", "id"]),
    EndpointRecord::new(Members, Post, "/api/members/delete-request", &["tripCode", "memberId", "memberName"]),
    EndpointRecord::new(Members, Post, "/api/members/delete-approve", &["tripCode", "id", "action"]),
    EndpointRecord::new(Members, Post, "/api/members/reimburse", &["tripCode", "id", "amount"]),
    EndpointRecord::new(Members, Post, "/api/members/refund", &["tripCode", "id", "amount"]),
    // Budget
    EndpointRecord::new(Budget, Post, "/api/budget/request", &["tripCode", "memberId", "memberName", "amount", "reason"]),
    EndpointRecord::new(Budget, Post, "/api/budget/approve", &["tripCode", "id", "action"]),
    EndpointRecord::new(Budget, Delete, "/api/budget/request/:id", &["tripCode", "id"]),
];

/// All remaining endpoints.
pub fn all() -> &'static [EndpointRecord] {
    ENDPOINTS
}

/// Endpoints of one group, keeping catalog order.
pub fn by_group(group: EndpointGroup) -> Vec<EndpointRecord> {
    ENDPOINTS
        .iter()
        .filter(|record| record.group == group)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_endpoints() {
        assert_eq!(all().len(), 16);
    }

    #[test]
    fn test_first_and_last_records() {
        let first = all().first().unwrap();
        assert_eq!(first.method, HttpMethod::Post);
        assert_eq!(first.path, "/api/contributions/request");
        assert_eq!(first.params, &["tripCode", "memberId", "amount", "memberName"]);

        let last = all().last().unwrap();
        assert_eq!(last.method, HttpMethod::Delete);
        assert_eq!(last.path, "/api/budget/request/:id");
        assert_eq!(last.params, &["tripCode", "id"]);
    }

    #[test]
    fn test_every_endpoint_takes_trip_code_first() {
        for record in all() {
            assert_eq!(record.params.first(), Some(&"tripCode"), "{}", record.path);
        }
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(by_group(Contributions).len(), 3);
        assert_eq!(by_group(Expenses).len(), 4);
        assert_eq!(by_group(Members).len(), 6);
        assert_eq!(by_group(Budget).len(), 3);
    }

    #[test]
    fn test_groups_are_contiguous_and_ordered() {
        let mut seen: Vec<EndpointGroup> = all().iter().map(|r| r.group).collect();
        seen.dedup();
        assert_eq!(seen, EndpointGroup::ALL.to_vec());
    }

    #[test]
    fn test_by_group_preserves_order() {
        let paths: Vec<&str> = by_group(Members).iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/api/members/approve",
                "/api/members/:id",
                "/api/members/delete-request",
                "/api/members/delete-approve",
                "/api/members/reimburse",
                "/api/members/refund",
            ]
        );
    }
}
