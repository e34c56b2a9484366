//! Boundary between the core and the host page's live DOM.
//!
//! The core never touches a real document; everything goes through the
//! [`DomPort`] trait so the browser bridge stays swappable and the rest of
//! the workspace is testable against [`PageSim`].

pub mod errors;
pub mod events;
pub mod ports;

#[cfg(feature = "sim")]
pub mod sim;

pub use errors::DomError;
pub use events::{DomEvents, PageEvent};
pub use ports::{DomPort, NodeId};

#[cfg(feature = "sim")]
pub use sim::PageSim;
