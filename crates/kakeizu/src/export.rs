//! Canvas backends.
//!
//! The compositor only knows [`PageCanvas`](kakeizu_core::canvas::PageCanvas);
//! the concrete surfaces live here. [`svg::SvgCanvas`] is the shipping
//! backend (one SVG document per page); [`trace::TraceCanvas`] records the
//! raw instruction stream and exists for testing compositor output without
//! a font stack.

pub mod svg;
pub mod trace;
