use thiserror::Error;

use crate::model::MethodId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A percentage was requested for an empty category.
    #[error("cannot express {numerator} as a percentage of zero")]
    Division { numerator: usize },
    /// The method is not reachable from any context of the suite.
    #[error("could not find matching end time for method '{method}'")]
    Consistency { method: MethodId },
}
