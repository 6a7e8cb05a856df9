//! Class name validation and derivation of the snake_case and SCREAMING_CASE forms.
//!
//! The derived forms are used both as file stems (`actor_spawned.hpp`) and as
//! substitution values for the lowercase and uppercase template placeholders.

use std::fmt;

use crate::error::{EvgenError, Result};

/// A validated event class name together with its derived spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventName {
    class_name: String,
    snake_name: String,
    screaming_name: String,
}

impl EventName {
    /// Validate `input` and derive the snake and screaming forms.
    ///
    /// Surrounding whitespace is ignored. The remaining text must be non-empty,
    /// start with an ASCII letter and contain only ASCII letters, digits and
    /// underscores.
    pub fn parse(input: &str) -> Result<Self> {
        let class_name = input.trim();
        validate(class_name)?;

        let snake_name = to_snake_case(class_name);
        let screaming_name = snake_name.to_ascii_uppercase();

        Ok(Self {
            class_name: class_name.to_string(),
            snake_name,
            screaming_name,
        })
    }

    /// The class name as given, e.g. `ActorSpawned`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Lowercase form with underscores, e.g. `actor_spawned`.
    pub fn snake_name(&self) -> &str {
        &self.snake_name
    }

    /// Uppercase form with underscores, e.g. `ACTOR_SPAWNED`.
    pub fn screaming_name(&self) -> &str {
        &self.screaming_name
    }

    /// First character of the class name, used for category dispatch.
    pub fn first_char(&self) -> char {
        // validate() guarantees at least one character
        self.class_name.chars().next().unwrap_or_default()
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

fn validate(name: &str) -> Result<()> {
    let invalid = |reason: &str| EvgenError::InvalidInput {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let first = chars.next().ok_or_else(|| invalid("class name is empty"))?;
    if !first.is_ascii_alphabetic() {
        return Err(invalid("class name must start with a letter"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!("unexpected character {bad:?}")));
    }
    Ok(())
}

/// Insert `_` before every uppercase letter after the first, then lowercase everything.
///
/// The first character is never prefixed, so `ActorSpawned` becomes
/// `actor_spawned` and not `_actor_spawned`. Runs of capitals are split per
/// letter: `ActorHP` becomes `actor_h_p`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        out.push(first);
    }
    for c in chars {
        if c.is_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out.to_lowercase()
}
