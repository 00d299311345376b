#![cfg(test)]

//! Logging for unit tests. Installed automatically by the `ctor` hook in
//! `lib.rs`; integration tests call `engine_test_support::logging::init`.

pub fn init() {
    engine_test_support::logging::init();
}
