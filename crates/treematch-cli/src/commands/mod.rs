pub mod batch;
pub mod compare;
pub mod config;
pub mod fixtures;
pub mod run_common;
pub mod tree;

#[cfg(test)]
mod testing;
