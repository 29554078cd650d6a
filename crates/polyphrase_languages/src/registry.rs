//! The language registry.
//!
//! Profiles are collected explicitly with [`LanguageRegistry::builder`] and
//! frozen by [`RegistryBuilder::build`]. The built-in registry registers
//! every language compiled in through cargo features, once, in a fixed
//! order.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::profile::LanguageProfile;

/// A read-only set of language profiles keyed by code.
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
    by_code: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the registry of built-in languages enabled at compile time.
    pub fn builtin() -> &'static LanguageRegistry {
        static BUILTIN: OnceLock<LanguageRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| RegistryBuilder::default().with_builtin().build())
    }

    /// Looks up a profile by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&LanguageProfile> {
        self.by_code
            .get(code)
            .and_then(|index| self.profiles.get(*index))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Registered codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(LanguageProfile::code)
    }

    /// Registered profiles in registration order.
    pub fn profiles(&self) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles.iter()
    }

    /// Number of registered languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no language is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Collects profiles for a [`LanguageRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    profiles: Vec<LanguageProfile>,
}

impl RegistryBuilder {
    /// Registers a profile. A later profile with an already registered code
    /// is ignored.
    #[must_use]
    pub fn register(mut self, profile: LanguageProfile) -> Self {
        if self.profiles.iter().any(|p| p.code() == profile.code()) {
            tracing::warn!(code = %profile.code(), "language already registered; ignoring");
            return self;
        }
        self.profiles.push(profile);
        self
    }

    /// Registers every built-in language enabled at compile time.
    #[must_use]
    #[allow(unused_mut)]
    pub fn with_builtin(mut self) -> Self {
        #[cfg(feature = "lang-en")]
        {
            self = self.register(crate::lang::en::profile());
        }
        #[cfg(feature = "lang-es")]
        {
            self = self.register(crate::lang::es::profile());
        }
        #[cfg(feature = "lang-pt")]
        {
            self = self.register(crate::lang::pt::profile());
        }
        #[cfg(feature = "lang-fr")]
        {
            self = self.register(crate::lang::fr::profile());
        }
        #[cfg(feature = "lang-de")]
        {
            self = self.register(crate::lang::de::profile());
        }
        #[cfg(feature = "lang-it")]
        {
            self = self.register(crate::lang::it::profile());
        }
        #[cfg(feature = "lang-ja")]
        {
            self = self.register(crate::lang::ja::profile());
        }
        #[cfg(feature = "lang-zh")]
        {
            self = self.register(crate::lang::zh::profile());
        }
        #[cfg(feature = "lang-ko")]
        {
            self = self.register(crate::lang::ko::profile());
        }
        #[cfg(feature = "lang-ar")]
        {
            self = self.register(crate::lang::ar::profile());
        }
        #[cfg(feature = "lang-tr")]
        {
            self = self.register(crate::lang::tr::profile());
        }
        #[cfg(feature = "lang-id")]
        {
            self = self.register(crate::lang::id::profile());
        }
        #[cfg(feature = "lang-vi")]
        {
            self = self.register(crate::lang::vi::profile());
        }
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> LanguageRegistry {
        let by_code = self
            .profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| (profile.code().to_string(), index))
            .collect();
        tracing::debug!(languages = self.profiles.len(), "language registry built");
        LanguageRegistry {
            profiles: self.profiles,
            by_code,
        }
    }
}
