//! Design tags - categorical flags decided once at ingestion.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const PROPRIETARY_ISL: &str = "pISL";
const OPEN_ISL: &str = "oISL";
const PROPRIETARY_SGL: &str = "pSGL";
const OPEN_SGL: &str = "oSGL";
const ISL: &str = "ISL";
const LEAD_GROUND_STATION: &str = " 1.GroundSta@SUR1";

/// Free-text design name, e.g. `1.SmallSat@MEO1,VIS,pSGL 1.GroundSta@SUR1,pSGL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunLabel(String);

impl RunLabel {
    /// Creates a run label, restoring `|` field separators to commas.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let label = raw.trim();
        if label.is_empty() {
            return Err(ValidationError::empty_field("run"));
        }
        Ok(Self(label.replace('|', ",")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Prefix describing the first player's assets, ending at its ground
    /// station in sector 1.
    ///
    /// Returns `None` unless the label starts with player `1` and contains
    /// that ground station. The last such station wins, so the prefix is as
    /// long as possible.
    pub fn first_player_segment(&self) -> Option<RunLabel> {
        if !self.0.starts_with('1') {
            return None;
        }
        let start = self.0.rfind(LEAD_GROUND_STATION)?;
        if start == 0 {
            return None;
        }
        let end = start + LEAD_GROUND_STATION.len();
        Some(RunLabel(self.0[..end].to_string()))
    }

    /// The same label with every open link replaced by its proprietary twin.
    pub fn with_proprietary_links(&self) -> RunLabel {
        RunLabel(
            self.0
                .replace(OPEN_SGL, PROPRIETARY_SGL)
                .replace(OPEN_ISL, PROPRIETARY_ISL),
        )
    }
}

impl fmt::Display for RunLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Link flags of a design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignTags {
    /// Any inter-satellite link.
    pub isl: bool,
    /// Proprietary inter-satellite link.
    pub pisl: bool,
    /// Open inter-satellite link.
    pub oisl: bool,
    /// Open space-to-ground link.
    pub osgl: bool,
}

impl DesignTags {
    /// Derives tags from the run label.
    ///
    /// `isl_column` overrides ISL detection when the table carries an
    /// explicit ISL flag.
    pub fn from_label(label: &RunLabel, isl_column: Option<bool>) -> Self {
        Self {
            isl: isl_column.unwrap_or_else(|| label.contains(ISL)),
            pisl: label.contains(PROPRIETARY_ISL),
            oisl: label.contains(OPEN_ISL),
            osgl: label.contains(OPEN_SGL),
        }
    }

    /// True when the design relies on at least one open (shared) link.
    pub fn is_shared(&self) -> bool {
        self.oisl || self.osgl
    }

    pub fn architecture(&self) -> Option<Architecture> {
        Architecture::classify(self)
    }
}

/// Link architecture of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    ProprietaryGround,
    ProprietaryGroundProprietaryIsl,
    ProprietaryGroundOpenIsl,
    OpenGround,
    OpenGroundProprietaryIsl,
    OpenGroundOpenIsl,
}

impl Architecture {
    pub const ALL: [Architecture; 6] = [
        Architecture::ProprietaryGround,
        Architecture::ProprietaryGroundProprietaryIsl,
        Architecture::ProprietaryGroundOpenIsl,
        Architecture::OpenGround,
        Architecture::OpenGroundProprietaryIsl,
        Architecture::OpenGroundOpenIsl,
    ];

    /// Classifies tags. A design carrying both ISL kinds has no architecture.
    pub fn classify(tags: &DesignTags) -> Option<Self> {
        match (tags.osgl, tags.pisl, tags.oisl) {
            (false, false, false) => Some(Architecture::ProprietaryGround),
            (false, true, false) => Some(Architecture::ProprietaryGroundProprietaryIsl),
            (false, false, true) => Some(Architecture::ProprietaryGroundOpenIsl),
            (true, false, false) => Some(Architecture::OpenGround),
            (true, true, false) => Some(Architecture::OpenGroundProprietaryIsl),
            (true, false, true) => Some(Architecture::OpenGroundOpenIsl),
            (_, true, true) => None,
        }
    }

    /// Legend text.
    pub fn label(&self) -> &'static str {
        match self {
            Architecture::ProprietaryGround => "pSGL",
            Architecture::ProprietaryGroundProprietaryIsl => "pSGL and pISL",
            Architecture::ProprietaryGroundOpenIsl => "pSGL and oISL",
            Architecture::OpenGround => "oSGL",
            Architecture::OpenGroundProprietaryIsl => "oSGL and pISL",
            Architecture::OpenGroundOpenIsl => "oSGL and oISL",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
