//! Seams onto the host platform's config-entry subsystem.

pub mod flows;

pub use flows::{ConfigEntryFlows, FlowContext, FlowError, FlowSource};
