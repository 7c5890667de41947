//! Data models for the NIKONEKTI marketplace.
//!
//! These models match the frontend TypeScript interfaces exactly, so a stored document
//! or a REST response body decodes without translation.

pub mod amenity;
mod dashboard;
mod forum;
mod inquiry;
mod language;
mod payment;
mod property;
mod tenant;
mod user;

pub use amenity::{Amenity, AMENITIES};
pub use dashboard::*;
pub use forum::*;
pub use inquiry::*;
pub use language::*;
pub use payment::*;
pub use property::*;
pub use tenant::*;
pub use user::*;
