//! Interview-ready — client for the interview-readiness check service.

pub mod api;
pub mod config;
pub mod contact;
pub mod error;
pub mod report;
pub mod wizard;
