#![allow(clippy::float_cmp)]

#[allow(dead_code)]
#[path = "../../benches/common/targets.rs"]
mod targets;

mod builder;
mod observer;
mod presets;
mod report;
