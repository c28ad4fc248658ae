//! HTTP search front end for the imago media archive
//!
//! A thin gateway between web clients and a remote Elasticsearch-
//! compatible media index: it builds filtered search bodies from query
//! parameters, executes them against the engine, normalizes the
//! returned documents, and serves the results as JSON or HTML.

pub mod api;
pub mod config;
pub mod error;
pub mod search;
