//! Runtime module — logging init and startup wiring for the binary.

pub mod boot;
