//! Client UI state.
//!
//! DESIGN
//! ======
//! Each module owns one piece of derived or persisted state and exposes it
//! as plain data plus pure functions; components wire the browser events in.
//! Only `theme` outlives a page navigation.

pub mod nav;
pub mod scroll;
pub mod theme;
pub mod toc;
