//! In-memory user CRUD service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────┐
//!                    │                USER SERVICE                 │
//!                    │                                             │
//!   Client Request   │  ┌─────────┐    ┌─────────┐    ┌────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│  users  │───▶│ users  │  │
//!                    │  │ server  │    │ router  │    │ store  │  │
//!   Client Response  │  └─────────┘    └─────────┘    └────────┘  │
//!   ◀────────────────┼───── JSON envelope or {message} error      │
//!                    │                                             │
//!                    │  ┌───────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns         │ │
//!                    │  │  ┌────────┐ ┌────────────┐ ┌────────┐ │ │
//!                    │  │  │ config │ │observability│ │lifecycle│ │ │
//!                    │  │  └────────┘ └────────────┘ └────────┘ │ │
//!                    │  └───────────────────────────────────────┘ │
//!                    └────────────────────────────────────────────┘
//! ```
//!
//! The store is process-local: no persistence, no cross-instance
//! consistency. All five CRUD operations run as single critical sections
//! over one shared collection.

// Core subsystems
pub mod config;
pub mod http;
pub mod users;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
