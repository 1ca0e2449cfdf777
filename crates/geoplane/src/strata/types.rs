//! Layer and age types.
//!
//! - `Age`: numeric age in Ma, or a chronostratigraphic label.
//! - `PERIODS`: base ages (Ma) of geological periods, youngest first.

use std::cmp::Ordering;
use std::fmt;

/// Base (oldest) age in Ma of each period, youngest first.
pub const PERIODS: &[(&str, f64)] = &[
    ("Quaternary", 2.58),
    ("Neogene", 23.03),
    ("Paleogene", 66.0),
    ("Cretaceous", 145.0),
    ("Jurassic", 201.4),
    ("Triassic", 251.9),
    ("Permian", 298.9),
    ("Carboniferous", 358.9),
    ("Devonian", 419.2),
    ("Silurian", 443.8),
    ("Ordovician", 485.4),
    ("Cambrian", 538.8),
    ("Precambrian", 4600.0),
];

/// Look up a period by name (case-insensitive, surrounding whitespace ignored).
pub fn period_base_ma(name: &str) -> Option<f64> {
    let name = name.trim();
    PERIODS
        .iter()
        .find(|(p, _)| p.eq_ignore_ascii_case(name))
        .map(|&(_, ma)| ma)
}

/// Age of a layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Age {
    /// Millions of years before present.
    Ma(f64),
    /// Named unit; resolves to Ma when it is a known period.
    Label(String),
}

impl Age {
    /// Numbers become `Ma`, anything else a trimmed `Label`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Age::Ma(v),
            _ => Age::Label(text.to_string()),
        }
    }

    /// Age in Ma when known.
    pub fn ma(&self) -> Option<f64> {
        match self {
            Age::Ma(v) => Some(*v),
            Age::Label(l) => period_base_ma(l),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Ma(v) => write!(f, "{v} Ma"),
            Age::Label(l) => match period_base_ma(l) {
                Some(ma) => write!(f, "{l} ({ma} Ma)"),
                None => write!(f, "{l}"),
            },
        }
    }
}

/// One layer of a stratigraphic column.
///
/// Invariants:
/// - `thickness` is a finite, non-negative length in the survey's units.
#[derive(Clone, Debug, PartialEq)]
pub struct StratigraphicLayer {
    pub name: String,
    pub age: Option<Age>,
    pub thickness: f64,
    pub lithology: Option<String>,
}

impl StratigraphicLayer {
    pub fn new(name: impl Into<String>, thickness: f64) -> Self {
        Self {
            name: name.into(),
            age: None,
            thickness,
            lithology: None,
        }
    }

    pub fn with_age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_lithology(mut self, lithology: impl Into<String>) -> Self {
        self.lithology = Some(lithology.into());
        self
    }
}

/// Sort key: dated < labelled < undated.
#[derive(Debug, PartialEq)]
pub(crate) enum AgeKey<'a> {
    Dated(f64),
    Labelled(&'a str),
    Undated,
}

impl<'a> AgeKey<'a> {
    pub(crate) fn of(age: Option<&'a Age>) -> Self {
        match age {
            None => AgeKey::Undated,
            Some(a) => match (a.ma(), a) {
                (Some(ma), _) => AgeKey::Dated(ma),
                (None, Age::Label(l)) => AgeKey::Labelled(l.as_str()),
                (None, Age::Ma(_)) => AgeKey::Undated,
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            AgeKey::Dated(_) => 0,
            AgeKey::Labelled(_) => 1,
            AgeKey::Undated => 2,
        }
    }

    pub(crate) fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AgeKey::Dated(a), AgeKey::Dated(b)) => a.total_cmp(b),
            (AgeKey::Labelled(a), AgeKey::Labelled(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
