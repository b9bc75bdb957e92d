//! Test suite for authapi
//!
//! Most tests run against the in-memory user store. The `database` tests
//! need a MongoDB server named by `MONGODB_URI` and skip without one.
