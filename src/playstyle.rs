use crate::error::{TeamForgeError, TfResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Maps the number of excess duplicate slots to a penalty in `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum DuplicatePenalty {
    /// `per_excess * excess`, but never below the `Ratio` curve, so an
    /// all-identical team always pays `max`.
    Linear { per_excess: f64, max: f64 },
    /// `max * excess / (team_size - 1)`, reaching `max` when every slot is identical.
    Ratio { max: f64 },
}

impl Default for DuplicatePenalty {
    fn default() -> Self {
        Self::Ratio { max: 0.5 }
    }
}

impl DuplicatePenalty {
    pub fn max(&self) -> f64 {
        match *self {
            Self::Linear { max, .. } | Self::Ratio { max } => max,
        }
    }

    pub fn apply(&self, excess: usize, team_size: usize) -> f64 {
        if excess == 0 {
            return 0.0;
        }
        let room = team_size.saturating_sub(1).max(1) as f64;
        let ratio = self.max() * (excess as f64 / room);
        let raw = match *self {
            Self::Linear { per_excess, .. } => (per_excess * excess as f64).max(ratio),
            Self::Ratio { .. } => ratio,
        };
        raw.clamp(0.0, self.max())
    }

    fn validate(&self) -> TfResult<()> {
        let max = self.max();
        if !(0.0..=1.0).contains(&max) {
            return Err(TeamForgeError::Config(format!(
                "duplicate penalty max must be within [0, 1], got {}",
                max
            )));
        }
        if let Self::Linear { per_excess, .. } = *self {
            if !(per_excess >= 0.0 && per_excess.is_finite()) {
                return Err(TeamForgeError::Config(format!(
                    "duplicate penalty per_excess must be non-negative, got {}",
                    per_excess
                )));
            }
        }
        Ok(())
    }
}

/// Requirements and weights that define what a good team looks like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaystyleProfile {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_roles: BTreeSet<String>,
    #[serde(default)]
    pub required_buffs: BTreeSet<String>,
    pub weight_buff: f64,
    pub weight_role: f64,
    #[serde(default)]
    pub duplicate_penalty: DuplicatePenalty,
}

impl PlaystyleProfile {
    pub fn new(name: &str, weight_buff: f64, weight_role: f64) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            required_roles: BTreeSet::new(),
            required_buffs: BTreeSet::new(),
            weight_buff,
            weight_role,
            duplicate_penalty: DuplicatePenalty::default(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_roles<'a>(mut self, roles: impl IntoIterator<Item = &'a str>) -> Self {
        self.required_roles.extend(roles.into_iter().map(String::from));
        self
    }

    pub fn with_buffs<'a>(mut self, buffs: impl IntoIterator<Item = &'a str>) -> Self {
        self.required_buffs.extend(buffs.into_iter().map(String::from));
        self
    }

    pub fn with_penalty(mut self, penalty: DuplicatePenalty) -> Self {
        self.duplicate_penalty = penalty;
        self
    }

    /// Weights must be non-negative and sum to 1; the penalty stays within [0, 1].
    pub fn validate(&self) -> TfResult<()> {
        if self.name.trim().is_empty() {
            return Err(TeamForgeError::Config("playstyle name is empty".into()));
        }
        for (label, w) in [("weight_buff", self.weight_buff), ("weight_role", self.weight_role)] {
            if !(0.0..=1.0).contains(&w) {
                return Err(TeamForgeError::Config(format!(
                    "{}: {} must be within [0, 1], got {}",
                    self.name, label, w
                )));
            }
        }
        let sum = self.weight_buff + self.weight_role;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(TeamForgeError::Config(format!(
                "{}: weight_buff + weight_role must equal 1, got {}",
                self.name, sum
            )));
        }
        self.duplicate_penalty.validate()
    }
}

/// Named playstyles, looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct PlaystyleRegistry {
    profiles: BTreeMap<String, PlaystyleProfile>,
}

impl PlaystyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for profile in builtin_profiles() {
            registry.profiles.insert(profile.name.to_lowercase(), profile);
        }
        registry
    }

    /// Adds or replaces a profile after validating it.
    pub fn insert(&mut self, profile: PlaystyleProfile) -> TfResult<()> {
        profile.validate()?;
        self.profiles.insert(profile.name.to_lowercase(), profile);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PlaystyleProfile> {
        self.profiles.get(&name.trim().to_lowercase())
    }

    pub fn resolve(&self, name: &str) -> TfResult<&PlaystyleProfile> {
        self.get(name)
            .ok_or_else(|| TeamForgeError::UnknownPlaystyle(name.to_string()))
    }

    pub fn profiles(&self) -> impl Iterator<Item = &PlaystyleProfile> {
        self.profiles.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.values().map(|p| p.name.as_str()).collect()
    }

    /// Merges a JSON array of profiles into the registry, overriding same-named entries.
    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> TfResult<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let profiles: Vec<PlaystyleProfile> = serde_json::from_reader(BufReader::new(file))?;
        let count = profiles.len();
        for profile in profiles {
            self.insert(profile)?;
        }
        info!(path = %path.display(), count, "Loaded playstyles");
        Ok(count)
    }
}

fn builtin_profiles() -> Vec<PlaystyleProfile> {
    vec![
        PlaystyleProfile::new("zerg", 0.375, 0.625)
            .with_description("Large-scale blob fights: sustain, stability and boon uptime")
            .with_roles(["heal", "quickness", "alacrity", "dps", "support"])
            .with_buffs([
                "stability",
                "aegis",
                "protection",
                "might",
                "quickness",
                "alacrity",
                "condition_cleanse",
                "boon_corrupt",
            ])
            .with_penalty(DuplicatePenalty::Ratio { max: 0.5 }),
        PlaystyleProfile::new("havoc", 0.5, 0.5)
            .with_description("Small mobile squads that split from the main force")
            .with_roles(["heal", "quickness", "dps"])
            .with_buffs(["quickness", "might", "fury", "superspeed", "stealth"])
            .with_penalty(DuplicatePenalty::Linear {
                per_excess: 0.1,
                max: 0.4,
            }),
        PlaystyleProfile::new("roaming", 0.25, 0.75)
            .with_description("Duo or trio groups hunting isolated targets")
            .with_roles(["bruiser", "support", "dps"])
            .with_buffs(["stealth", "condition_cleanse", "resistance", "superspeed"])
            .with_penalty(DuplicatePenalty::Linear {
                per_excess: 0.15,
                max: 0.6,
            }),
        PlaystyleProfile::new("raid_guild", 0.5, 0.5)
            .with_description("Organised guild groups running full boon coverage")
            .with_roles(["heal", "quickness", "alacrity", "dps"])
            .with_buffs([
                "might",
                "fury",
                "quickness",
                "alacrity",
                "protection",
                "regeneration",
                "vigor",
                "resolution",
            ])
            .with_penalty(DuplicatePenalty::Ratio { max: 0.3 }),
    ]
}
