// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Course Registry Service - in-memory CRUD over a JSON REST API.
//!
//! Stores course records in process memory only: the registry is empty at
//! startup and its contents die with the process. Ids are server-generated
//! UUIDs and never change once assigned.
//!
//! # Usage
//!
//! ```bash
//! # Start on default port 8080
//! course-registry
//!
//! # Custom port and bind address
//! course-registry --port 9000 --bind 127.0.0.1
//! ```
//!
//! # Endpoints
//!
//! - `GET /courses/` - List all courses
//! - `POST /courses/` - Create a course (server assigns the id)
//! - `GET /courses/{id}` - Fetch one course
//! - `PUT /courses/{id}` - Replace a course (id preserved)
//! - `DELETE /courses/{id}` - Remove a course
//! - `GET /health` - Liveness check

mod handlers;
mod model;
mod registry;
mod routes;

use axum::Router;
use clap::Parser;
use registry::CourseRegistry;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Course Registry Service
#[derive(Parser, Debug)]
#[command(name = "course-registry")]
#[command(about = "In-memory course registry with a JSON REST API")]
#[command(version)]
struct Args {
    /// HTTP server port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Shared application state
pub struct AppState {
    registry: CourseRegistry,
    started_at: Instant,
}

impl AppState {
    fn new() -> Self {
        Self {
            registry: CourseRegistry::new(),
            started_at: Instant::now(),
        }
    }

    fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Setup logging
    let filter = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .init();

    // Create shared state
    let state = Arc::new(AppState::new());

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", args.bind, args.port);
    info!("Course Registry v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP server: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}

fn build_router(state: Arc<AppState>) -> Router {
    routes::api_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
