//! Per-host capability records.
//!
//! Each supported AI chat service gets one immutable [`SiteCapability`]
//! describing how to find its input surface, how to write into it, and
//! when a keystroke counts as "send". A pure resolver picks the record for
//! the current host; nothing is ever probed on the live page.

pub mod model;
pub mod registry;
pub mod triggers;

pub use model::{PopupAlign, PopupPlacement, ServiceId, SiteCapability};
pub use registry::{resolve, select_input, supported_services};
