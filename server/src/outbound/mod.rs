//! Outbound adapters: everything that talks to the store.

pub mod persistence;
