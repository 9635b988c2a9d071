//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pulls its static content from `content` and delegates layout to
//! `components`; none of them hold state beyond what the components own.

pub mod demo;
pub mod docs;
pub mod domain;
pub mod home;
pub mod not_found;
pub mod performance;
pub mod portfolio;
pub mod project;
pub mod resume;
