//! Multi-leg flight itinerary search server.
//!
//! A web application that answers: "starting from this airport, what is
//! the fastest way to visit one airport in every world region?"

pub mod amadeus;
pub mod domain;
pub mod notify;
pub mod planner;
pub mod web;
