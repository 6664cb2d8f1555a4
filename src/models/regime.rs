use serde::{Deserialize, Serialize};
use std::fmt;

/// On-duty / off-duty day pattern of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Regime {
    #[default]
    FourteenFourteen,
    TwentyOneTwentyOne,
    TwentyEightTwentyEight,
    FortyFiveFortyFive,
    Custom {
        on: u32,
        off: u32,
    },
}

impl Regime {
    pub const PRESETS: [Regime; 4] = [
        Regime::FourteenFourteen,
        Regime::TwentyOneTwentyOne,
        Regime::TwentyEightTwentyEight,
        Regime::FortyFiveFortyFive,
    ];

    pub fn days_on(&self) -> u32 {
        match self {
            Regime::FourteenFourteen => 14,
            Regime::TwentyOneTwentyOne => 21,
            Regime::TwentyEightTwentyEight => 28,
            Regime::FortyFiveFortyFive => 45,
            Regime::Custom { on, .. } => *on,
        }
    }

    pub fn days_off(&self) -> u32 {
        match self {
            Regime::Custom { off, .. } => *off,
            preset => preset.days_on(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}x{}", self.days_on(), self.days_off())
    }

    /// Parse a regime label such as `"14x14"` or `"28X28"`.
    ///
    /// Preset labels map to their variant, any other well-formed `ONxOFF`
    /// pair with positive counts becomes [`Regime::Custom`], and everything
    /// else falls back to 14/14.
    pub fn parse(label: &str) -> Self {
        Self::parse_strict(label).unwrap_or_default()
    }

    /// Like [`Regime::parse`] but without the 14/14 fallback.
    pub fn parse_strict(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase();
        let (on_raw, off_raw) = normalized.split_once('x')?;
        let on: u32 = on_raw.trim().parse().ok()?;
        let off: u32 = off_raw.trim().parse().ok()?;

        if on == 0 || off == 0 {
            return None;
        }

        Some(Self::from_days(on, off))
    }

    pub fn from_days(on: u32, off: u32) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|p| p.days_on() == on && p.days_off() == off)
            .unwrap_or(Regime::Custom { on, off })
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<String> for Regime {
    fn from(s: String) -> Self {
        Regime::parse(&s)
    }
}

impl From<Regime> for String {
    fn from(r: Regime) -> Self {
        r.label()
    }
}
