pub mod annotations;
pub mod classifier;
pub mod error;
pub mod groups;
pub mod render;
pub mod summary;
pub mod text;
pub mod timing;

pub use self::error::Error;
