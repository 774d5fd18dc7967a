//! taskmarket service library: CRUD HTTP endpoints for users, orders, and
//! offers backed by a SQLite store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod sample_data;
pub mod server;
