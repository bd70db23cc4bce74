use std::collections::{BTreeMap, BTreeSet};

use crate::configuration::constants::report::NO_GROUP;
use crate::model::{Suite, SuiteResult, TestMethod};

/// Every distinct class-level group seen across the suite, including
/// [`NO_GROUP`] when some test class declares none or a suite result holds
/// no test methods at all.
///
/// This is a full scan over all methods and may name groups that
/// [`results_by_group`] leaves unpopulated: a suite result spanning several
/// groups is only filed under the first of them.
pub fn groups_of(suite: &Suite) -> BTreeSet<String> {
    let mut groups = BTreeSet::new();
    for result in suite.suite_results() {
        let methods = result.context.all_test_methods();
        if methods.is_empty() {
            groups.insert(NO_GROUP.to_owned());
        }
        for method in methods {
            let group = method.class.declared_group();
            if group.is_empty() {
                groups.insert(NO_GROUP.to_owned());
            } else {
                groups.insert(group);
            }
        }
    }
    debug!("Discovered {} groups in suite '{}'", groups.len(), suite.name);
    groups
}

/// Files each suite result under the first non-empty class group among its
/// test methods, or under [`NO_GROUP`] when there is none.
///
/// Lists keep the suite's result order and are never empty; every key is
/// also returned by [`groups_of`].
pub fn results_by_group(suite: &Suite) -> BTreeMap<String, Vec<&SuiteResult>> {
    let mut results_by_group: BTreeMap<String, Vec<&SuiteResult>> = BTreeMap::new();
    for result in suite.suite_results() {
        let group = first_declared_group(result).unwrap_or_else(|| NO_GROUP.to_owned());
        trace!("Suite result '{}' filed under group '{}'", result.name(), group);
        results_by_group.entry(group).or_default().push(result);
    }
    results_by_group
}

fn first_declared_group(result: &SuiteResult) -> Option<String> {
    result
        .context
        .all_test_methods()
        .iter()
        .map(|method| method.class.declared_group())
        .find(|group| !group.is_empty())
}

/// Test methods indexed by their method-level framework groups.
pub fn methods_by_groups(suite: &Suite) -> BTreeMap<&str, Vec<&TestMethod>> {
    let mut methods_by_groups: BTreeMap<&str, Vec<&TestMethod>> = BTreeMap::new();
    for result in suite.suite_results() {
        for method in result.context.all_test_methods() {
            for group in &method.groups {
                methods_by_groups.entry(group.as_str()).or_default().push(method);
            }
        }
    }
    methods_by_groups
}

pub fn has_groups(suite: &Suite) -> bool {
    !methods_by_groups(suite).is_empty()
}
