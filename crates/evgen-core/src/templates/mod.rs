//! Event templates: where they come from and how they are specialised.
//!
//! Templates are either read from disk by [`loader::TemplatePair::load`] or taken
//! from the copies compiled into the binary ([`embedded`]). Either way they are
//! specialised with [`substitute::Substitutions`], which performs literal
//! placeholder replacement.

pub mod embedded;
pub mod loader;
pub mod substitute;
