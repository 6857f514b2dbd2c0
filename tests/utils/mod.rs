// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod factories;
pub mod memory;
pub mod test_db;
