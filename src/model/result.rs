use derivative::*;
use serde_derive::{Deserialize, Serialize};
use std::iter::FromIterator;

use super::{Argument, Millis, TestMethod, Throwable};

#[derive(Clone, PartialEq, Serialize, Deserialize, Builder, Derivative)]
#[derivative(Debug)]
#[builder(setter(into))]
pub struct TestResult {
    pub method: TestMethod,
    pub start_millis: Millis,
    pub end_millis: Millis,
    /// Compound `name@id` thread identifier.
    #[serde(default)]
    #[builder(default)]
    pub thread_id: String,
    #[serde(default)]
    #[builder(default)]
    pub parameters: Vec<Argument>,
    #[serde(default)]
    #[builder(default)]
    pub throwable: Option<Throwable>,
    /// Lines logged through the framework reporter while this result ran.
    #[serde(default)]
    #[builder(default)]
    #[derivative(Debug = "ignore")]
    pub output: Vec<String>,
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }
}

/// Results sharing one outcome category within a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<TestResult>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: TestResult) {
        self.0.push(result);
    }

    #[inline]
    pub fn all_results(&self) -> &[TestResult] {
        &self.0
    }

    /// Distinct methods of this set, in order of first appearance.
    pub fn all_methods(&self) -> Vec<&TestMethod> {
        let mut methods: Vec<&TestMethod> = Vec::with_capacity(self.0.len());
        for result in &self.0 {
            if !methods.iter().any(|m| m.id == result.method.id) {
                methods.push(&result.method);
            }
        }
        methods
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TestResult>> for ResultSet {
    fn from(results: Vec<TestResult>) -> Self {
        ResultSet(results)
    }
}

impl FromIterator<TestResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = TestResult>>(iter: I) -> Self {
        ResultSet(iter.into_iter().collect())
    }
}
