//! Tooth cross-section: geometry, the scripted animation and its static summary.
//!
//! The scene is a molar crown with an inner dentin layer and an outer enamel
//! layer. Acid particles fall onto the enamel, the enamel erodes down towards
//! the dentin, and finally a protective coating grows over what is left.

pub mod profile;
pub mod sim;
pub mod stages;
pub mod ui;

pub use profile::{interp, ToothProfile};
pub use sim::{Phase, Tone, ToothSimulation};
pub use stages::{Stage, StageSet};
