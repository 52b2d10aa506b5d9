//! Wangari Maathai Analytics Middleware Library
//!
//! Fetches incident reports from the upstream reports backend (falling back
//! to a fixed mock dataset whenever the backend is unavailable), aggregates
//! them into dashboard statistics and map points, and serves both over HTTP.
//!
//! # Modules
//!
//! - `analytics`: Dashboard aggregation (summary, hotspots, categories, recent reports).
//! - `backend_client`: Upstream client with token login and mock fallback.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `geo`: Coordinate extraction from report locations.
//! - `handlers`: HTTP request handlers, router and OpenAPI document.
//! - `mock_data`: Fixed fallback report collection.
//! - `models`: Report and response data models.

pub mod analytics;
pub mod backend_client;
pub mod config;
pub mod errors;
pub mod geo;
pub mod handlers;
pub mod mock_data;
pub mod models;
