//! # Blue Ocean API Endpoints
//!
//! Endpoint implementations for the credentials client. The client only
//! needs the credentials resource today.

pub mod credentials;
