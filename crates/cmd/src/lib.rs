pub mod commands;
pub mod common;
pub mod error_utils;
pub mod tree_format;
