//! Court search service.
//!
//! A web application that answers: "I need a court for this kind of
//! case, which ones serve my postcode?"

pub mod cache;
pub mod directory;
pub mod domain;
pub mod os;
pub mod search;
pub mod web;
