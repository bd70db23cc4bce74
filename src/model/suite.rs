use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};

use super::{DefectRegistry, InvokedMethod, TestContext};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteResult {
    pub context: TestContext,
}

impl SuiteResult {
    pub fn name(&self) -> &str {
        &self.context.name
    }
}

impl From<TestContext> for SuiteResult {
    fn from(context: TestContext) -> Self {
        Self { context }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    /// Results keyed by test name, in the order the run recorded them.
    #[serde(default)]
    pub results: IndexMap<String, SuiteResult>,
    /// Every invocation of the run in chronological order.
    #[serde(default)]
    pub invoked_methods: Vec<InvokedMethod>,
    #[serde(default)]
    pub open_defects: Option<DefectRegistry>,
    #[serde(default)]
    pub fixed_defects: Option<DefectRegistry>,
}

impl Suite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            results: IndexMap::new(),
            invoked_methods: Vec::new(),
            open_defects: None,
            fixed_defects: None,
        }
    }

    pub fn with_result<T: Into<SuiteResult>>(mut self, result: T) -> Self {
        let result = result.into();
        self.results.insert(result.name().to_owned(), result);
        self
    }

    pub fn with_invocations(mut self, invocations: Vec<InvokedMethod>) -> Self {
        self.invoked_methods = invocations;
        self
    }

    pub fn suite_results(&self) -> impl Iterator<Item = &SuiteResult> {
        self.results.values()
    }
}
