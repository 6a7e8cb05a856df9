//! Literal placeholder substitution.
//!
//! Templates are plain source files with bare placeholder words rather than
//! delimited tags:
//!
//! | Placeholder | Replaced with                    | Files            |
//! |-------------|----------------------------------|------------------|
//! | `Template`  | class name (`ActorSpawned`)      | both             |
//! | `TEMPLATE`  | screaming name (`ACTOR_SPAWNED`) | both             |
//! | `template`  | snake name (`actor_spawned`)     | both             |
//! | `Scope`     | scope class (`Actor`)            | both             |
//! | `origin`    | scope header (`actor/actor.hpp`) | implementation   |
//!
//! Matching is case-sensitive and ignores word boundaries, so `templateVariable`
//! becomes `actor_spawnedVariable`. Template authors must avoid these words in
//! text that should survive generation.
//!
//! All placeholders are replaced in one left-to-right pass over the original
//! text. Inserted values are never scanned again, so a class such as
//! `ActorScopeChanged` keeps its name instead of turning into `ActorActorChanged`.

use crate::category::Category;
use crate::name::EventName;

/// One placeholder and the text it is replaced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'a> {
    pub placeholder: &'a str,
    pub value: &'a str,
}

/// An ordered set of substitutions. Earlier entries win when several
/// placeholders match at the same position.
#[derive(Debug, Clone, Default)]
pub struct Substitutions<'a> {
    rules: Vec<Substitution<'a>>,
}

impl<'a> Substitutions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Empty placeholders are ignored.
    pub fn with(mut self, placeholder: &'a str, value: &'a str) -> Self {
        if !placeholder.is_empty() {
            self.rules.push(Substitution { placeholder, value });
        }
        self
    }

    /// Rules for the header template.
    pub fn for_header(name: &'a EventName, category: Category) -> Self {
        Self::new()
            .with("Template", name.class_name())
            .with("TEMPLATE", name.screaming_name())
            .with("template", name.snake_name())
            .with("Scope", category.scope_name())
    }

    /// Rules for the implementation template: the header rules plus `origin`.
    pub fn for_source(name: &'a EventName, category: Category) -> Self {
        Self::for_header(name, category).with("origin", category.include_path())
    }

    pub fn rules(&self) -> &[Substitution<'a>] {
        &self.rules
    }

    /// Replace every placeholder occurrence in `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            match self.rules.iter().find(|r| rest.starts_with(r.placeholder)) {
                Some(rule) => {
                    out.push_str(rule.value);
                    rest = &rest[rule.placeholder.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }
}
