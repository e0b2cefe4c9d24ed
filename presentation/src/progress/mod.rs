//! Progress reporting for the drafting pipeline

pub mod reporter;
