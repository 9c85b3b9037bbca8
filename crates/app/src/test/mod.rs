//! Test infrastructure for Postgres-backed tests.


pub(crate) use db::TestDb;
