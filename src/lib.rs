//! Building material estimator.
//!
//! Two cores share one service: a quantity takeoff engine that turns building
//! dimensions into per-trade material quantities, and a feature aggregator
//! that merges per-photo feature reports from a vision service into a single
//! best estimate of the building.

pub mod aggregation;
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod estimating;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
