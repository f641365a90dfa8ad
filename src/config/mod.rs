use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{
    currency::{CurrencyCode, FormatOptions, LocaleConfig},
    errors::SummaryError,
};

pub const DEFAULT_STORES_DIR: &str = "stores";
pub const DEFAULT_OUTPUT_DIR: &str = "salesTotalDir";
pub const TOTALS_FILE_NAME: &str = "totals.txt";
pub const REPORT_FILE_NAME: &str = "salesReport.txt";

pub const STORES_DIR_ENV: &str = "SALES_SUMMARY_STORES_DIR";
pub const OUTPUT_DIR_ENV: &str = "SALES_SUMMARY_OUTPUT_DIR";
pub const CURRENCY_ENV: &str = "SALES_SUMMARY_CURRENCY";

/// Everything a summary run needs to know about where to read and write.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub stores_dir: PathBuf,
    pub output_dir: PathBuf,
    pub totals_file: String,
    pub report_file: String,
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub format: FormatOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stores_dir: PathBuf::from(DEFAULT_STORES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            totals_file: TOTALS_FILE_NAME.into(),
            report_file: REPORT_FILE_NAME.into(),
            currency: CurrencyCode::default(),
            locale: LocaleConfig::default(),
            format: FormatOptions::default(),
        }
    }
}

impl Config {
    /// Default layout rooted at `base`.
    pub fn in_dir(base: &Path) -> Self {
        Self {
            stores_dir: base.join(DEFAULT_STORES_DIR),
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            ..Self::default()
        }
    }

    /// Resolves the configuration against the process working directory.
    pub fn from_env() -> Result<Self, SummaryError> {
        let base = env::current_dir().map_err(|err| SummaryError::io_at(".", err))?;
        Self::from_env_in(&base)
    }

    /// Applies the `SALES_SUMMARY_*` overrides on top of [`Config::in_dir`].
    pub fn from_env_in(base: &Path) -> Result<Self, SummaryError> {
        Self::from_lookup(base, |key| env::var_os(key))
    }

    fn from_lookup<F>(base: &Path, lookup: F) -> Result<Self, SummaryError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::in_dir(base);
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(stores) = non_empty(STORES_DIR_ENV) {
            config.stores_dir = base.join(stores);
        }
        if let Some(output) = non_empty(OUTPUT_DIR_ENV) {
            config.output_dir = base.join(output);
        }
        if let Some(code) = non_empty(CURRENCY_ENV) {
            let code = code.into_string().map_err(|raw| {
                SummaryError::InvalidConfig(format!(
                    "{} is not valid unicode: {:?}",
                    CURRENCY_ENV, raw
                ))
            })?;
            config.currency = CurrencyCode::parse(&code)?;
        }
        Ok(config)
    }

    pub fn totals_path(&self) -> PathBuf {
        self.output_dir.join(&self.totals_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }
}
