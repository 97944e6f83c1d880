//! The Pitchside storefront application.
//!
//! Wires the domain crates into a request-handling application:
//! configuration, routing, session handling, HTML rendering with flash
//! alerts, and demo seeding. Requests come in as [`RequestContext`]
//! values and leave as [`Response`] values carrying the served page's
//! alert elements, which auto-dismiss on the alert subsystem's schedule.

mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod render;
pub mod router;
pub mod routes;
pub mod seed;

pub use app::App;
pub use config::{AppConfig, AppEnv};
pub use context::{Method, RequestContext, RequestId, Response};
pub use error::AppError;
pub use logging::{LogFormat, LogLevel, StructuredLogger};
pub use router::{Endpoint, Router};
