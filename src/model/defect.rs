use serde_derive::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Iter};

use super::{MethodId, TestResult};

/// Results tied to a tracked defect, grouped by the method they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefectRegistry(BTreeMap<MethodId, Vec<TestResult>>);

impl DefectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, method: &MethodId, result: TestResult) {
        self.0.entry(method.clone()).or_default().push(result);
    }

    pub fn results(&self, method: &MethodId) -> &[TestResult] {
        self.0.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_methods(&self) -> Vec<&MethodId> {
        self.0.keys().collect()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, MethodId, Vec<TestResult>> {
        self.0.iter()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of methods with at least one result.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
