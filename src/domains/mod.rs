//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes tools only; see [`tools`].

pub mod tools;
