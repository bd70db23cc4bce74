use serde_derive::{Deserialize, Serialize};

use super::{MethodId, Millis};

/// One invocation of a method, used to rebuild chronological order across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokedMethod {
    pub method: MethodId,
    pub date: Millis,
    #[serde(default)]
    pub thread_id: String,
}

impl InvokedMethod {
    pub fn new<T: Into<MethodId>>(method: T, date: Millis) -> Self {
        Self {
            method: method.into(),
            date,
            thread_id: String::new(),
        }
    }

    pub fn on_thread(mut self, thread_id: &str) -> Self {
        self.thread_id = thread_id.to_owned();
        self
    }
}
