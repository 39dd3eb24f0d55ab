//! Pure set-difference planning for membership reconciliation

use std::collections::HashSet;

/// The add/remove operations needed to turn a current member list into a
/// desired one.
///
/// Both lists are deduplicated and keep first-occurrence order so that
/// partial-failure reporting is deterministic. Equality is exact string
/// comparison, case-sensitive, matching the remote server's behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipPlan {
    /// Members present remotely but not desired, in current-list order.
    pub to_remove: Vec<String>,
    /// Members desired but absent remotely, in desired-list order.
    pub to_add: Vec<String>,
}

impl MembershipPlan {
    /// Compute the plan as two set differences: `to_remove = current − desired`
    /// and `to_add = desired − current`.
    pub fn diff(current: &[String], desired: &[String]) -> Self {
        let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();
        let desired_set: HashSet<&str> = desired.iter().map(String::as_str).collect();

        Self {
            to_remove: difference(current, &desired_set),
            to_add: difference(desired, &current_set),
        }
    }

    /// True when the plan carries no operations.
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }
}

/// Elements of `items` not in `other`, deduplicated, first occurrence wins.
fn difference(items: &[String], other: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| !other.contains(item.as_str()) && seen.insert(item.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn diff_computes_both_directions() {
        let current = emails(&["a@x.com", "b@x.com"]);
        let desired = emails(&["b@x.com", "c@x.com"]);

        let plan = MembershipPlan::diff(&current, &desired);

        assert_eq!(plan.to_remove, emails(&["a@x.com"]));
        assert_eq!(plan.to_add, emails(&["c@x.com"]));
    }

    #[test]
    fn converged_sets_produce_an_empty_plan() {
        let members = emails(&["a@x.com", "b@x.com"]);

        let plan = MembershipPlan::diff(&members, &members);

        assert!(plan.is_empty());
    }

    #[test]
    fn add_and_remove_are_always_disjoint() {
        let current = emails(&["a@x.com", "b@x.com", "c@x.com"]);
        let desired = emails(&["c@x.com", "d@x.com", "a@x.com"]);

        let plan = MembershipPlan::diff(&current, &desired);

        for email in &plan.to_add {
            assert!(!plan.to_remove.contains(email));
        }
        assert_eq!(plan.to_remove, emails(&["b@x.com"]));
        assert_eq!(plan.to_add, emails(&["d@x.com"]));
    }

    #[test]
    fn duplicates_collapse_to_one_operation() {
        let current = emails(&["a@x.com", "a@x.com"]);
        let desired = emails(&["b@x.com", "b@x.com"]);

        let plan = MembershipPlan::diff(&current, &desired);

        assert_eq!(plan.to_remove, emails(&["a@x.com"]));
        assert_eq!(plan.to_add, emails(&["b@x.com"]));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let current = emails(&["A@x.com"]);
        let desired = emails(&["a@x.com"]);

        let plan = MembershipPlan::diff(&current, &desired);

        assert_eq!(plan.to_remove, emails(&["A@x.com"]));
        assert_eq!(plan.to_add, emails(&["a@x.com"]));
    }

    #[test]
    fn empty_inputs_are_handled() {
        let none: Vec<String> = Vec::new();
        let some = emails(&["a@x.com"]);

        let fill = MembershipPlan::diff(&none, &some);
        assert_eq!(fill.to_add, some);
        assert!(fill.to_remove.is_empty());

        let drain = MembershipPlan::diff(&some, &none);
        assert_eq!(drain.to_remove, some);
        assert!(drain.to_add.is_empty());
    }
}
