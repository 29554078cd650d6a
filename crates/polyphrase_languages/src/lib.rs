//! Language profiles for polyphrase.
//!
//! This crate provides:
//! - [`LanguageProfile`] - Per-language keywords, particles, morphology, and idioms
//! - [`LanguageRegistry`] - The explicit, read-only set of registered profiles
//! - [`Normalization`] and [`MorphRule`] - How words are reduced to lemmas
//! - [`detect_languages`] and [`Region`] - Vocabulary-based detection and regional bundles
//!
//! Each built-in language lives in its own module under [`lang`] behind a
//! `lang-xx` cargo feature; region features (`western`, `east-asian`,
//! `southeast-asian`, `priority`) enable groups of them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod detect;
pub mod idiom;
pub mod lang;
pub mod morphology;
pub mod normalize;
pub mod profile;
pub mod registry;

pub use detect::{Region, detect_languages, optimal_region};
pub use idiom::{BodyVariant, EventForm, EventFormKind, EventPart};
pub use morphology::{AffixPosition, MorphRule};
pub use normalize::Normalization;
pub use profile::{Form, LanguageProfile, MarkerPosition, ProfileBuilder, Script, WordOrder};
pub use registry::{LanguageRegistry, RegistryBuilder};
