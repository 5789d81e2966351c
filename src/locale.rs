//! Locale resolution and case folding.
//!
//! The environment's locale decides whether we may fold case at all: the
//! input is decoded as UTF-8 and folded with Unicode rules, so a locale
//! that names a different codeset (say `ru_RU.KOI8-R`) would disagree with
//! what we actually do. We refuse to run under such a locale instead of
//! folding inconsistently with the environment.

use std::env;

use crate::error::{Result, WordFreqError};

/// POSIX precedence for the character-classification locale.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone)]
pub struct Locale {
    name: String,
}

impl Locale {
    /// Resolves the locale from `LC_ALL` / `LC_CTYPE` / `LANG` (first
    /// non-empty wins). When none is set, the POSIX default `C` applies.
    pub fn from_env() -> Result<Self> {
        for key in LOCALE_VARS {
            match env::var(key) {
                Ok(value) if !value.is_empty() => return Self::from_name(&value),
                Ok(_) | Err(env::VarError::NotPresent) => {}
                Err(env::VarError::NotUnicode(_)) => {
                    return Err(WordFreqError::LocaleResolution {
                        reason: format!("environment variable {key} holds non-Unicode data"),
                    });
                }
            }
        }
        Self::from_name("C")
    }

    pub fn from_name(name: &str) -> Result<Self> {
        if supports_unicode_folding(name) {
            Ok(Self { name: name.to_owned() })
        } else {
            Err(WordFreqError::LocaleResolution {
                reason: format!("locale '{name}' does not use a UTF-8 codeset"),
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercases a token with full Unicode case mapping, over the whole
    /// code point range. `ß` expands to `ss`, `İ` to `i̇`, and so on.
    pub fn fold(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// A locale name is usable when Unicode case mapping agrees with it:
/// `C`/`POSIX` (ASCII repertoire), no explicit codeset, or a UTF-8 codeset.
fn supports_unicode_folding(name: &str) -> bool {
    let base = name.split('@').next().unwrap_or(name);
    if base == "C" || base == "POSIX" {
        return true;
    }
    match base.split_once('.') {
        None => true,
        Some((_, codeset)) => {
            let normalized: String = codeset
                .chars()
                .filter(|ch| *ch != '-' && *ch != '_')
                .collect::<String>()
                .to_ascii_lowercase();
            normalized == "utf8"
        }
    }
}
