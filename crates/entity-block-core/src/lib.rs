//! entity-block Core Types and Definitions
//!
//! This crate provides the foundational types shared by the entity-block
//! parser, layout engine and renderer. It includes:
//!
//! - **Semantic model**: Entities, ports and generics ([`semantic`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawing primitives and text measurement ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
