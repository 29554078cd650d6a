//! Built-in language profiles, one module per language.
//!
//! Each module depends only on the profile types, never on another
//! language, so any subset can be compiled in through cargo features.

#[cfg(feature = "lang-ar")]
pub mod ar;
#[cfg(feature = "lang-de")]
pub mod de;
#[cfg(feature = "lang-en")]
pub mod en;
#[cfg(feature = "lang-es")]
pub mod es;
#[cfg(feature = "lang-fr")]
pub mod fr;
#[cfg(feature = "lang-id")]
pub mod id;
#[cfg(feature = "lang-it")]
pub mod it;
#[cfg(feature = "lang-ja")]
pub mod ja;
#[cfg(feature = "lang-ko")]
pub mod ko;
#[cfg(feature = "lang-pt")]
pub mod pt;
#[cfg(feature = "lang-tr")]
pub mod tr;
#[cfg(feature = "lang-vi")]
pub mod vi;
#[cfg(feature = "lang-zh")]
pub mod zh;
