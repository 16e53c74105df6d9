//! Persona Engine - Psychometric selection and scoring
//!
//! This crate assembles assessment forms from a question bank under coverage
//! constraints and turns completed percentile profiles into compatibility and
//! shadow-trait reports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
