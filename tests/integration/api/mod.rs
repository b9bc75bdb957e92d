//! API integration tests

mod user_test;
