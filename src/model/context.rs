use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Millis, ResultSet, TestMethod};

/// Parameters declared on the `<test>` unit that ran a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestConfiguration {
    /// Defect ids, keyed by class name and then method name.
    #[serde(default)]
    pub defects: HashMap<String, HashMap<String, String>>,
    /// Free-text descriptions keyed by class name.
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

impl TestConfiguration {
    pub fn defect(&self, class: &str, method: &str) -> Option<&str> {
        self.defects
            .get(class)
            .and_then(|methods| methods.get(method))
            .map(String::as_str)
    }

    pub fn description(&self, class: &str) -> Option<&str> {
        self.descriptions.get(class).map(String::as_str)
    }

    pub fn with_defect(mut self, class: &str, method: &str, defect: &str) -> Self {
        self.defects
            .entry(class.to_owned())
            .or_default()
            .insert(method.to_owned(), defect.to_owned());
        self
    }

    pub fn with_description(mut self, class: &str, description: &str) -> Self {
        self.descriptions
            .insert(class.to_owned(), description.to_owned());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct TestContext {
    pub name: String,
    pub start_millis: Millis,
    pub end_millis: Millis,
    #[serde(default)]
    #[builder(default)]
    pub passed_tests: ResultSet,
    #[serde(default)]
    #[builder(default)]
    pub failed_tests: ResultSet,
    #[serde(default)]
    #[builder(default)]
    pub skipped_tests: ResultSet,
    #[serde(default)]
    #[builder(default)]
    pub passed_configurations: ResultSet,
    #[serde(default)]
    #[builder(default)]
    pub failed_configurations: ResultSet,
    #[serde(default)]
    #[builder(default)]
    pub skipped_configurations: ResultSet,
    /// Every test method of the context, in framework enumeration order.
    #[serde(default)]
    #[builder(default)]
    pub test_methods: Vec<TestMethod>,
    #[serde(default)]
    #[builder(default)]
    pub configuration: TestConfiguration,
    /// Recording of the whole session the context ran in.
    #[serde(default)]
    #[builder(default)]
    pub video_url: Option<String>,
    /// Recordings of methods that ran in a session of their own, by method name.
    #[serde(default)]
    #[builder(default)]
    pub method_video_urls: HashMap<String, String>,
}

impl TestContext {
    pub fn builder() -> TestContextBuilder {
        TestContextBuilder::default()
    }

    #[inline]
    pub fn all_test_methods(&self) -> &[TestMethod] {
        &self.test_methods
    }

    /// All six result buckets: configurations before tests, passed, skipped
    /// then failed.
    pub fn buckets(&self) -> [&ResultSet; 6] {
        [
            &self.passed_configurations,
            &self.passed_tests,
            &self.skipped_configurations,
            &self.skipped_tests,
            &self.failed_configurations,
            &self.failed_tests,
        ]
    }

    pub fn total_tests(&self) -> usize {
        self.passed_tests.len() + self.skipped_tests.len() + self.failed_tests.len()
    }
}
