//! Stockfile application layer: the demonstration routine behind the
//! `stockfile` binary.

pub mod demo;
