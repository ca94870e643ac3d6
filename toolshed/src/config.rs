//! Configuration readable from a config file.
//!
//! All settings are optional; a missing file section means built-in
//! defaults. Command line arguments always take precedence over the file.
//!
//! ```toml
//! [eol]
//! style = "dos"
//!
//! [mkpwd]
//! pattern = "4z-4z-4z"
//! count = 3
//!
//! [mkpwd.alphabets]
//! h = "0123456789abcdef"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use toolshed_util::file::{fopen_w, Visibility};

use crate::eol::EolStyle;
use crate::pwd::Alphabets;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Toolshed {
    /// Settings of `toolshed eol`
    #[serde(default)]
    pub eol: EolConfig,

    /// Settings of `toolshed mkpwd`
    #[serde(default)]
    pub mkpwd: MkpwdConfig,

    /// Where the configuration was loaded from
    #[serde(skip)]
    pub config_file_path: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EolConfig {
    /// Line end written when no style flag is given
    #[serde(default)]
    pub style: EolStyle,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MkpwdConfig {
    /// Password pattern used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// How many passwords to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Additional or replaced alphabets, by their letter
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub alphabets: BTreeMap<String, String>,
}

impl Toolshed {
    /// Load a config file from a file path
    ///
    /// No validation is conducted.
    pub fn load<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let text = fs::read_to_string(&p)
            .with_context(|| format!("could not read config file {:?}", p.as_ref()))?;
        let mut config: Self = toml::from_str(&text)
            .with_context(|| format!("could not parse config file {:?}", p.as_ref()))?;
        config.config_file_path = p.as_ref().to_owned();
        Ok(config)
    }

    /// Write the configuration to a file
    pub fn store<P: AsRef<Path>>(&self, p: P) -> anyhow::Result<()> {
        let serialized = toml::to_string_pretty(&self)?;
        let mut f = fopen_w(&p, Visibility::Public)
            .with_context(|| format!("could not write config file {:?}", p.as_ref()))?;
        f.write_all(serialized.as_bytes())?;
        Ok(())
    }

    /// Check the values that serde cannot check
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(count) = self.mkpwd.count {
            ensure!(count > 0, "mkpwd.count must be at least 1");
        }
        self.mkpwd.alphabets()?;
        Ok(())
    }

    /// A configuration showing off all options
    pub fn example_config() -> Self {
        let mut alphabets = BTreeMap::new();
        alphabets.insert("h".to_owned(), "0123456789abcdef".to_owned());
        alphabets.insert("s".to_owned(), "!#$%&*+-=?@^_".to_owned());

        Self {
            eol: EolConfig {
                style: EolStyle::Unix,
            },
            mkpwd: MkpwdConfig {
                pattern: Some("4z-4z-4z".to_owned()),
                count: Some(1),
                alphabets,
            },
            config_file_path: PathBuf::new(),
        }
    }
}

impl MkpwdConfig {
    /// The default alphabets, amended by the configured ones
    pub fn alphabets(&self) -> anyhow::Result<Alphabets> {
        let mut alphabets = Alphabets::default();
        for (name, chars) in self.alphabets.iter() {
            let mut letters = name.chars();
            let letter = match (letters.next(), letters.next()) {
                (Some(letter), None) => letter,
                _ => anyhow::bail!("alphabet names are single letters, not {name:?}"),
            };
            alphabets.set(letter, chars)?;
        }
        Ok(alphabets)
    }
}
