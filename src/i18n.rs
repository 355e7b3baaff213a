use std::collections::HashMap;

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Site languages. The catalog always carries an English entry, so `En` is
/// the fallback chain's last stop before the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    En,
    Tr,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
            Language::Ar => "ar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
            Language::Ar => "العربية",
        }
    }

    pub fn next(self) -> Language {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

type Catalog = HashMap<String, HashMap<String, String>>;

const CATALOG_JSON: &str = include_str!("translations.json");

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| serde_json::from_str(CATALOG_JSON).unwrap_or_default());

/// Fails fast at startup if the embedded catalog is malformed; the Lazy
/// fallback above would otherwise degrade every lookup to the raw key.
pub fn ensure_catalog() -> anyhow::Result<()> {
    let parsed: Catalog = serde_json::from_str(CATALOG_JSON)
        .context("embedded translation catalog is not valid JSON")?;
    anyhow::ensure!(!parsed.is_empty(), "embedded translation catalog is empty");
    Ok(())
}

/// Pure (key, language) -> display text lookup. Missing language falls back
/// to English, missing key falls back to the key itself.
pub fn translate(key: &str, language: Language) -> String {
    let Some(entry) = CATALOG.get(key) else {
        return key.to_string();
    };
    entry
        .get(language.code())
        .or_else(|| entry.get(Language::En.code()))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_parses() {
        ensure_catalog().expect("embedded catalog is valid");
    }

    #[test]
    fn lookup_translates_and_falls_back() {
        assert_eq!(translate("community", Language::Tr), "Topluluk");
        assert_eq!(translate("community", Language::En), "Community");
        // Unknown key echoes back.
        assert_eq!(translate("no_such_key", Language::Ar), "no_such_key");
    }
}
