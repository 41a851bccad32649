//! Closed enumerations stored as small integers.
//!
//! The storage layer keeps these as raw numeric codes; converting a raw value
//! back to its variant is fallible and reports an [`UnknownCode`] error
//! rather than panicking, since exhaustiveness of stored data cannot be
//! guaranteed.

use std::fmt;

/// A raw value with no corresponding enumeration variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCode {
    /// The enumeration the value was converted against.
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: i64,
}

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! try_from_raw {
    ($type:ty, $kind:literal, [$($variant:ident = $raw:literal),+ $(,)?]) => {
        impl TryFrom<i64> for $type {
            type Error = UnknownCode;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $($raw => Ok(Self::$variant),)+
                    _ => Err(UnknownCode { kind: $kind, value }),
                }
            }
        }
    };
}

/// How a pesticide is applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Application {
    /// Aerial application.
    Aerial,
    /// Ground application.
    Ground,
    /// Application through irrigation.
    Irrigation,
    /// Application by plant dip.
    PlantDip,
    /// Application as a seed treatment.
    SeedTreatment,
}

try_from_raw!(
    Application,
    "application",
    [Aerial = 1, Ground = 2, Irrigation = 3, PlantDip = 4, SeedTreatment = 5]
);

impl Application {
    /// The single-character application code.
    pub fn code(self) -> char {
        match self {
            Self::Aerial => 'A',
            Self::Ground => 'G',
            Self::Irrigation => 'I',
            Self::PlantDip => 'D',
            Self::SeedTreatment => 'S',
        }
    }

    /// The upper-case registry label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aerial => "AERIAL",
            Self::Ground => "GROUND",
            Self::Irrigation => "IRRIGATION",
            Self::PlantDip => "PLANT DIP",
            Self::SeedTreatment => "SEED TREATMENT",
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aerial => "Aerial",
            Self::Ground => "Ground",
            Self::Irrigation => "Irrigation",
            Self::PlantDip => "Plant Dip",
            Self::SeedTreatment => "Seed Treatment",
        };
        f.write_str(name)
    }
}

/// The signal word printed on a pesticide label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignalWord {
    /// "Caution".
    Caution,
    /// "Danger".
    Danger,
    /// "Danger/Poison".
    DangerPoison,
    /// "Warning".
    Warning,
    /// No signal word given.
    None,
}

try_from_raw!(
    SignalWord,
    "signal word",
    [Caution = 1, Danger = 2, DangerPoison = 3, Warning = 4, None = 5]
);

impl SignalWord {
    /// The single-character signal word code.
    pub fn code(self) -> char {
        match self {
            Self::Caution => 'C',
            Self::Danger => 'D',
            Self::DangerPoison => 'T',
            Self::Warning => 'W',
            Self::None => 'N',
        }
    }

    /// The upper-case registry label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caution => "CAUTION",
            Self::Danger => "DANGER",
            Self::DangerPoison => "DANGER/POISON",
            Self::Warning => "WARNING",
            Self::None => "NO SIGNAL WORD GIVEN",
        }
    }
}

impl fmt::Display for SignalWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Caution => "Caution",
            Self::Danger => "Danger",
            Self::DangerPoison => "Danger/Poison",
            Self::Warning => "Warning",
            Self::None => "None",
        };
        f.write_str(name)
    }
}

/// A state covered by the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum State {
    /// Washington.
    Washington,
    /// Oregon.
    Oregon,
}

try_from_raw!(State, "state", [Washington = 1, Oregon = 2]);

impl State {
    /// The full state name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Washington => "Washington",
            Self::Oregon => "Oregon",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The intended user of a pesticide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IntendedUser {
    /// Commercial use.
    Commercial,
    /// Home use.
    Home,
}

try_from_raw!(IntendedUser, "intended user", [Commercial = 1, Home = 2]);

impl IntendedUser {
    /// The single-character intended user code.
    pub fn code(self) -> char {
        match self {
            Self::Commercial => 'C',
            Self::Home => 'H',
        }
    }

    /// The registry label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Commercial => "Commercial",
            Self::Home => "Home",
        }
    }
}

impl fmt::Display for IntendedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
