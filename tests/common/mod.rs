#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::{scenario_policy, PolicyBuilder, TestUrls};
