use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref GROUP_ANNOTATION_REGEX: Regex =
        Regex::new(r"Group\(name=(?P<names>[^)]*)").expect("Regex compilation error");
}

/// Stable identity of a test method, shared by every result and invocation
/// of that method across all buckets of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(String);

impl MethodId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for MethodId {
    fn from(id: &str) -> Self {
        MethodId(id.to_owned())
    }
}

impl From<String> for MethodId {
    fn from(id: String) -> Self {
        MethodId(id)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct TestClass {
    pub name: String,
    /// Group declared for the whole class by the metadata loader.
    #[serde(default)]
    #[builder(default)]
    pub group: Option<String>,
    /// Raw annotation strings, kept for records exported without `group`.
    #[serde(default)]
    #[builder(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub description: Option<String>,
}

impl TestClass {
    pub fn builder() -> TestClassBuilder {
        TestClassBuilder::default()
    }

    /// Class-level group name, or an empty string when none is declared.
    ///
    /// The structured `group` field wins. Otherwise the annotations are
    /// scanned for a `Group(name=...)` entry; the last matching annotation
    /// decides and only the first name of a list is taken.
    pub fn declared_group(&self) -> String {
        if let Some(group) = &self.group {
            return group.clone();
        }
        self.annotations
            .iter()
            .filter_map(|annotation| parse_group_annotation(annotation))
            .last()
            .unwrap_or_default()
    }
}

fn parse_group_annotation(annotation: &str) -> Option<String> {
    let caps = GROUP_ANNOTATION_REGEX.captures(annotation)?;
    let names = caps
        .name("names")?
        .as_str()
        .replace(&['[', ']'][..], "");
    names.split(',').next().map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct TestMethod {
    pub id: MethodId,
    pub name: String,
    pub class: TestClass,
    /// Method-level framework groups.
    #[serde(default)]
    #[builder(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub groups_depended_upon: Vec<String>,
    #[serde(default)]
    #[builder(default)]
    pub methods_depended_upon: Vec<String>,
}

impl TestMethod {
    pub fn builder() -> TestMethodBuilder {
        TestMethodBuilder::default()
    }
}
