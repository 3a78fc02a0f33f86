// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Service configuration, read from the environment at startup.

use crate::generate::GeneratorConfig;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub generator: GeneratorConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, generator: GeneratorConfig::default() }
    }
}

impl ServiceConfig {
    /// Reads `GALATEA_PORT`, `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL`.
    /// Unset variables keep their defaults; a malformed port is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup("GALATEA_PORT").and_then(|raw| raw.parse().ok()) {
            config.port = port;
        }
        config.generator.api_key = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty());
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            config.generator.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            config.generator.model = model;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ServiceConfig, DEFAULT_PORT};

    fn from_map(vars: &[(&str, &str)]) -> ServiceConfig {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        ServiceConfig::from_lookup(|name| vars.get(name).map(|value| (*value).to_owned()))
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = from_map(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.generator.api_key.is_none());
        assert_eq!(config.generator.base_url, "https://api.openai.com/v1");
        assert_eq!(config.generator.model, "gpt-4o-mini");
    }

    #[test]
    fn environment_overrides_take_effect() {
        let config = from_map(&[
            ("GALATEA_PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_MODEL", "llama3"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.generator.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generator.base_url, "http://localhost:11434/v1");
        assert_eq!(config.generator.model, "llama3");
    }

    #[test]
    fn malformed_port_and_empty_key_are_ignored() {
        let config = from_map(&[("GALATEA_PORT", "many"), ("OPENAI_API_KEY", "")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.generator.api_key.is_none());
    }
}
