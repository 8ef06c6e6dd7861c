use crate::{
    manifest::Manifest,
    template::{Template, Variant},
    DEFAULT_OUT_DIR,
};
use std::{fmt::Display, path::PathBuf, str::FromStr};

const SOUL_HARVESTER_URL: &str = "https://soulharvester.xyz";

/// A collection compiled into the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Preset {
    /// The Keeper of the Veil collection, numbered by name
    #[default]
    KeeperOfTheVeil,
    /// The Soul Stone collection, numbered by level
    SoulStone,
}

impl Preset {
    /// All presets
    pub const ALL: [Preset; 2] = [Preset::KeeperOfTheVeil, Preset::SoulStone];

    /// The template of this preset
    pub fn template(self) -> Template {
        match self {
            Preset::KeeperOfTheVeil => Template {
                name: "Keeper of the Veil #".to_string(),
                description: Some(
                    "The true believers and servants of the greater vision!".to_string(),
                ),
                external_url: Some(SOUL_HARVESTER_URL.to_string()),
                image: "ipfs://QmW12aPELteJTDHzmHpQtGMN9RBwrhJMvjaaFuTfNu7Fw5".to_string(),
            },
            Preset::SoulStone => Template {
                name: "Soul Stone Dummy".to_string(),
                description: Some("There is something kept inside!".to_string()),
                external_url: Some(SOUL_HARVESTER_URL.to_string()),
                image: "ipfs://QmbMRuKiLjQ6kjdQ3qDS2YkY18cLXvg41byaCEReSnsXz5".to_string(),
            },
        }
    }

    /// How items of this preset are numbered
    pub fn variant(self) -> Variant {
        match self {
            Preset::KeeperOfTheVeil => Variant::NameSuffix,
            Preset::SoulStone => Variant::Level,
        }
    }

    /// The amount of items in this preset
    pub fn count(self) -> u32 {
        match self {
            Preset::KeeperOfTheVeil => 50,
            Preset::SoulStone => 10,
        }
    }

    /// The manifest generating this preset into the default output directory
    pub fn manifest(self) -> Manifest {
        Manifest {
            count: self.count(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            variant: self.variant(),
            pretty: false,
            template: self.template(),
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::KeeperOfTheVeil => write!(f, "keeper-of-the-veil"),
            Preset::SoulStone => write!(f, "soul-stone"),
        }
    }
}

impl FromStr for Preset {
    type Err = errors::PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.to_string() == s)
            .ok_or_else(|| errors::PresetParseError::Unknown(s.to_string()))
    }
}

/// Errors that can occur when parsing a preset
pub mod errors {
    use thiserror::Error;

    /// Errors that can occur when parsing a preset
    #[derive(Debug, Error)]
    #[non_exhaustive]
    pub enum PresetParseError {
        /// No preset has the given name
        #[error(
            "unknown preset {0}, expected one of: {}",
            super::Preset::ALL.map(|preset| preset.to_string()).join(", ")
        )]
        Unknown(String),
    }
}
