//! Record module: the recorder data model.
//!
//! `render` and `digest` build derived views on top of the types here.

pub mod op;
pub mod operand;
pub mod recorder;
pub mod sequencer;
