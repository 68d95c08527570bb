//! Refreshable Animation System
//!
//! Spring physics used by the refreshable scroll container.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Scheduler**: Owns a set of springs and advances them together
//! - **Interruptible**: Retargeting a spring keeps its current velocity

pub mod scheduler;
pub mod spring;

pub use scheduler::{AnimationScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
