//! Kakeizu Core Types and Definitions
//!
//! This crate provides the foundational types for the kakeizu ancestral
//! chart generator. It includes:
//!
//! - **Schema**: the fixed five-generation relationship table ([`schema`] module)
//! - **Geometry**: page-space geometric types ([`geometry`] module)
//! - **Record**: the parsed chart data model ([`record`] module)
//! - **Matcher**: label/tag attribute matching ([`matcher`] module)
//! - **Canvas**: the drawing-surface trait consumed by the compositor
//!   ([`canvas`] module)

pub mod canvas;
pub mod geometry;
pub mod matcher;
pub mod record;
pub mod schema;
