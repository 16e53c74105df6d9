//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (percentiles, IDs, errors)
//! - `assessment` - Dimensions, questions, banks, tiers and profiles
//! - `selection` - Constrained form selection and validation
//! - `compatibility` - Pairwise profile comparison
//! - `shadow` - Dark Triad projection
//!
//! Everything here is pure and synchronous. Randomness enters only through
//! the generator or seed handed to the selector.

pub mod assessment;
pub mod compatibility;
pub mod foundation;
pub mod selection;
pub mod shadow;
