//! FFI crate for the TidyHome Flutter shell.

pub mod api;
