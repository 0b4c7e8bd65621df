//! Rating service collaborator

pub mod client;

pub use client::{LichessClient, RatingProvider};
