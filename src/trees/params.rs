use crate::error::{Error, Result};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Baseline the split remainder is subtracted from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GainConvention {
    /// `1 - remainder`. Reproduces the classic printed trees.
    #[default]
    UnitBaseline,
    /// `B(p / (p + n)) - remainder`, the entropy of the node's own labels.
    Entropy,
}

impl FromStr for GainConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unit" => Ok(GainConvention::UnitBaseline),
            "entropy" => Ok(GainConvention::Entropy),
            other => Err(Error::Parameters(format!(
                "gain convention must be either 'unit' or 'entropy', got {:?}",
                other
            ))),
        }
    }
}

impl Display for GainConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GainConvention::UnitBaseline => write!(f, "unit"),
            GainConvention::Entropy => write!(f, "entropy"),
        }
    }
}

/// How a plurality vote with equal counts is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The label whose text sorts first wins.
    #[default]
    Lexicographic,
    /// A coin flip. Without a seed the outcome isn't reproducible between fits.
    Random { seed: Option<u64> },
}

impl TieBreak {
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        match self {
            TieBreak::Random { .. } => TieBreak::Random { seed },
            lexicographic => lexicographic,
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lexicographic" => Ok(TieBreak::Lexicographic),
            "random" => Ok(TieBreak::Random { seed: None }),
            other => Err(Error::Parameters(format!(
                "tie break must be either 'lexicographic' or 'random', got {:?}",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TreeParams {
    pub gain: GainConvention,
    pub tie_break: TieBreak,
    pub max_attributes: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            gain: GainConvention::default(),
            tie_break: TieBreak::default(),
            max_attributes: 64,
        }
    }

    pub fn set_gain(&mut self, gain: GainConvention) {
        self.gain = gain;
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }

    /// Bounds the recursion depth, which never exceeds the attribute count.
    pub fn set_max_attributes(&mut self, max_attributes: usize) -> Result<()> {
        if max_attributes < 1 {
            return Err(Error::Parameters(
                "the attribute limit must be greater than 0".into(),
            ));
        }
        self.max_attributes = max_attributes;
        Ok(())
    }

    pub fn gain(&self) -> GainConvention {
        self.gain
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn max_attributes(&self) -> usize {
        self.max_attributes
    }
}
