//! Daily pick rules
//!
//! A player picked on some day cannot be picked again for the next
//! thirty days. `eligibility` answers who is pickable on a given day.

pub mod eligibility;

pub use eligibility::{
    availability, available_past_picks, is_eligible, search_availability, unavailable_until,
    Availability, AvailablePick, SearchResult,
};
