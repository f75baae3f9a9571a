//! CLI command implementations.
//!
//! One module per batch type; each module owns its argument struct, the
//! translation of raw arguments into a validated override model, and the call
//! into the core's batch driver.

pub mod branches_cmd;
pub mod labels_cmd;
pub mod repos_cmd;
pub mod teams_cmd;
