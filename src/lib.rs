#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod geocode;
pub mod logging;
pub mod model;
pub mod route;
pub mod storage;
pub mod tui;
