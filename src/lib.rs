//! Utale Prompts — deterministic prompt composition for AI-generated,
//! personalized children's books.
//!
//! Turns structured character and theme data into the text artifacts sent
//! to external generative models: a system instruction and a user
//! instruction for the story model, and a per-page illustration
//! instruction for the image model. Every operation is a pure function of
//! its inputs — no I/O, no randomness, no hidden state — so callers can
//! invoke them concurrently and test them without mocks.

pub mod core;
pub mod schema;
