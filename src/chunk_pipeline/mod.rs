//! This module is the pure, in-memory compression engine. It wires the kernels
//! together (filter -> LZW -> bitstream) and owns the artifact layout. It knows
//! nothing about how callers hold their pixels; that is the bridge's job.

pub mod artifact;
pub mod context;
pub mod orchestrator;

#[cfg(test)]
mod orchestrator_tests;
