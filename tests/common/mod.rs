//! Shared test utilities for pinpoint integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders produce [`pinpoint_core::Feature`] fixtures;
//! fakes stand in for the HTTP source and the rendering surface.

#![allow(unused)]

pub mod builders;
pub mod fakes;

pub use builders::*;
pub use fakes::*;
