//! Configuration module for the countdown tool.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use serde::Deserialize;

use crate::metrics::Metric;

/// Store file used when no configuration overrides it
const DEFAULT_STORE_PATH: &str = "countdown-store.json";

/// Main configuration structure for the application.
///
/// Every section is optional; an absent configuration file behaves like an
/// empty one.
#[derive(Deserialize, Clone, Default)]
pub struct Conf {
    /// Persistence settings
    storage: Option<Storage>,
    /// Display preferences
    display: Option<Display>,
}

/// Persistence settings.
#[derive(Deserialize, Clone)]
struct Storage {
    /// Path of the JSON key-value store file
    path: String,
}

/// Display preferences.
#[derive(Deserialize, Clone)]
struct Display {
    /// Headline metric shown when `show` is run without `--metric`
    metric: Option<Metric>,
}

impl Conf {
    /// Returns the store file path, configured or default.
    pub fn store_path(&self) -> &str {
        self.storage
            .as_ref()
            .map(|storage| storage.path.as_str())
            .unwrap_or(DEFAULT_STORE_PATH)
    }

    /// Returns the default headline metric.
    ///
    /// # Returns
    /// - Configured metric, or working days when none is set
    pub fn default_metric(&self) -> Metric {
        self.display
            .as_ref()
            .and_then(|display| display.metric)
            .unwrap_or(Metric::WorkingDays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conf_uses_defaults() {
        let conf = Conf::default();
        assert_eq!(conf.store_path(), DEFAULT_STORE_PATH);
        assert_eq!(conf.default_metric(), Metric::WorkingDays);
    }

    #[test]
    fn toml_sections_override_defaults() {
        let conf: Conf = toml::from_str(
            "[storage]\npath = \"/tmp/countdown.json\"\n\n[display]\nmetric = \"total-seconds\"\n",
        )
        .unwrap();
        assert_eq!(conf.store_path(), "/tmp/countdown.json");
        assert_eq!(conf.default_metric(), Metric::TotalSeconds);
    }

    #[test]
    fn partial_sections_are_fine() {
        let conf: Conf = toml::from_str("[display]\n").unwrap();
        assert_eq!(conf.store_path(), DEFAULT_STORE_PATH);
        assert_eq!(conf.default_metric(), Metric::WorkingDays);
    }
}
