//! SQLite persistence for meetcost.
//!
//! The schema is a single `kv` table whose rows hold JSON documents, plus
//! the `migrations` bookkeeping table.

/// Connection management.
pub mod db;

/// String key/value operations on the `kv` table.
pub mod kv;

/// Versioned schema migrations.
pub mod migrations;
