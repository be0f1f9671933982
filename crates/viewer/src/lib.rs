// Domain-driven module structure for the logview core.

// Core infrastructure
pub mod config;
pub mod filter;
pub mod parser;

// Domain modules
pub mod files;
pub mod runtime;
pub mod scan;
pub mod search;
pub mod view;
