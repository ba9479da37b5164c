//! Picture flashcards with spoken answers. The deck comes from a
//! `*.deck.toml` file; a session shows one shuffled card at a time, reveals
//! its answer on request, and can read the answer aloud through an injected
//! text-to-speech backend.

pub mod deck_loader;
pub mod deck_locator;
pub mod error;
pub mod session;
pub mod shuffle;
pub mod speech;
pub mod types;
