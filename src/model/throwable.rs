use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowableKind {
    Error,
    Assertion,
    /// The framework's "skip this test" signal rather than a failure.
    Skip,
}

impl Default for ThrowableKind {
    fn default() -> Self {
        ThrowableKind::Error
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct Throwable {
    pub class_name: String,
    #[serde(default)]
    #[builder(default)]
    pub kind: ThrowableKind,
    #[serde(default)]
    #[builder(default)]
    pub message: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub cause: Option<Box<Throwable>>,
    #[serde(default)]
    #[builder(default)]
    pub stack_trace: Vec<String>,
}

impl Throwable {
    pub fn builder() -> ThrowableBuilder {
        ThrowableBuilder::default()
    }

    pub fn caused_by(mut self, cause: Throwable) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}
