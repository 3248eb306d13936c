//! Metro route planner server.
//!
//! Loads one or more city metro networks and answers: "how do I get from
//! this station to that one with the fewest changes?"

pub mod catalog;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
