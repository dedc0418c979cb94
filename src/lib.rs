//! WaterProofFish chat - a small browser chat front-end for Gemini
//!
//! The server keeps one in-memory [`session::Session`], forwards each user
//! message to the hosted model with the selected personality instruction,
//! and renders the replies in an embedded web page.

pub mod api;
pub mod config;
pub mod forwarder;
pub mod llm;
pub mod session;
