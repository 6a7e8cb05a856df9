//! Core library for evgen, the event class scaffolding tool.
//!
//! Turns an UpperCamelCase class name such as `ActorSpawned` into a header and
//! an implementation file by copying two templates and replacing their
//! placeholder words. The first letter of the class name selects the scope the
//! event runs on:
//!
//! - `A`: `Actor` (`actor/actor.hpp`)
//! - `M`: `MapData` (`map/mapdata.hpp`)
//! - `G`: `GameInfo` (`core/gameinfo.hpp`)
//!
//! The entry point is [`generator::Generator`].

pub mod category;
pub mod config;
pub mod error;
pub mod generator;
pub mod name;
pub mod templates;
