//! Conversions between numeric and text encodings, plus regex match
//! navigation over a host-owned text document.
//!
//! The conversion half ([`convert`], [`chain`]) is pure and has no host
//! coupling. The navigation half ([`scan`], [`text`], [`navigator`],
//! [`selection`]) talks to the host only through the capability traits in
//! [`document`].

pub mod chain;
pub mod config;
pub mod convert;
pub mod document;
pub mod memory;
pub mod navigator;
pub mod scan;
pub mod selection;
pub mod session;
pub mod text;
