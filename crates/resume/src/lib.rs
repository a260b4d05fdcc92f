//! Resume items GraphQL backend.
//!
//! An API Gateway proxy handler that serves a per-user collection of resume
//! items over GraphQL. Items live in DynamoDB (or in memory for local runs);
//! the domain types and repository contract come from `resume_core`.

pub mod config;
pub mod graphql;
pub mod handler;
pub mod resolvers;
pub mod server;
pub mod storage;
