pub mod cargo_env {
    pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
}

pub mod report {
    /// Group of every suite result whose test classes declare no group.
    pub const NO_GROUP: &str = "No Group";
    pub const DEFAULT_TITLE: &str = "Test Results Report";
    pub const ENV_PREFIX: &str = "SALVO";
}
