//! State Management
//!
//! Reactive wrapper around the core dashboard view state.

pub mod global;

pub use global::{provide_dashboard, DashboardContext};
