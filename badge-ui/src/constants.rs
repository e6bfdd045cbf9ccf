// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration read from `window.__BADGE_CONFIG`.

use class_merge::MergePolicy;
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

const CONFIG_KEY: &str = "__BADGE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "mergePolicy")]
    #[serde(default)]
    pub merge_policy: Option<String>,
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Configured merge policy, `Tailwind` when unset.
    pub fn merge_policy(&self) -> Result<MergePolicy, String> {
        match self.merge_policy.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(name) => name
                .parse()
                .map_err(|e| format!("Invalid mergePolicy in {CONFIG_KEY}: {e}")),
            None => Ok(MergePolicy::default()),
        }
    }

    /// Configured console log level, `Info` when unset.
    pub fn log_level(&self) -> Result<log::Level, String> {
        match self.log_level.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(level) => level
                .trim()
                .parse()
                .map_err(|_| format!("Invalid logLevel in {CONFIG_KEY}: `{level}`")),
            None => Ok(log::Level::Info),
        }
    }

    /// Every configured field, parsed. Any invalid field is an error.
    pub fn validate(&self) -> Result<ValidConfig, String> {
        Ok(ValidConfig {
            merge_policy: self.merge_policy()?,
            log_level: self.log_level()?,
        })
    }
}

/// A [`RuntimeConfig`] whose fields have all been parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidConfig {
    pub merge_policy: MergePolicy,
    pub log_level: log::Level,
}

/// Read the runtime config. A missing global is not an error; it yields the
/// defaults.
pub fn badge_config() -> Result<RuntimeConfig, String> {
    let Some(win) = window() else {
        return Ok(RuntimeConfig::default());
    };
    let config =
        js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_KEY)).unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse {CONFIG_KEY}: {e:?}"))
}
