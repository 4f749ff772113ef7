//! Pure function and struct tests (no I/O).

mod ber;
mod config;
mod oid;
