pub mod argument;
pub mod context;
pub mod defect;
pub mod invocation;
pub mod method;
pub mod result;
pub mod suite;
pub mod throwable;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::argument::Argument;
pub use self::context::{TestConfiguration, TestContext, TestContextBuilder};
pub use self::defect::DefectRegistry;
pub use self::invocation::InvokedMethod;
pub use self::method::{MethodId, TestClass, TestClassBuilder, TestMethod, TestMethodBuilder};
pub use self::result::{ResultSet, TestResult, TestResultBuilder};
pub use self::suite::{Suite, SuiteResult};
pub use self::throwable::{Throwable, ThrowableBuilder, ThrowableKind};

/// Milliseconds since the Unix epoch, as recorded by the test framework.
pub type Millis = i64;
