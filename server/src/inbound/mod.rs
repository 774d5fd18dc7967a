//! Inbound adapters: protocol surfaces that drive the domain.

pub mod http;
