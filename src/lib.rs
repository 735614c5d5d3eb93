pub mod application;
pub mod commands;
pub mod error;
pub mod package;
pub mod query;
pub mod runtime;
