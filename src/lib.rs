#[macro_use]
extern crate log;

#[macro_use]
extern crate derive_builder;

pub mod configuration;
pub mod model;
pub mod report;
pub mod time;
