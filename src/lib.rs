//! Enamel - a terminal animation of tooth enamel erosion and protection.
//!
//! Enamel walks a chemistry audience through a three-phase story on a molar
//! cross-section: acid particles attack the enamel, the enamel dissolves down
//! towards the dentin, and a protective coating forms over what remains.
//! Supporting views chart why this happens and how coating materials compare.
//!
//! # Features
//!
//! - Frame-scripted erosion and coating animation
//! - Static three-stage summary
//! - pH/solubility, coating effectiveness and compatibility charts
//! - Deterministic runs from a seed
//! - Headless animated GIF export
//!
//! # Example
//!
//! ```no_run
//! use enamel::config::AnimationConfig;
//! use enamel::tooth::ToothSimulation;
//!
//! let mut sim = ToothSimulation::new(AnimationConfig::default(), 42);
//! for frame in 0..200 {
//!     sim.update(frame);
//! }
//! println!("{}", sim.title());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod tooth;
pub mod ui;

pub use error::{EnamelError, Result};
