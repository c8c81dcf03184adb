//! # Option Catalog Module
//!
//! Static reference data for the three-step selection: departments, years and
//! the semesters each year offers. Codes are the exact callback data carried
//! by the inline buttons and are matched case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Callback data of the "Back" button on the year menu
pub const BACK_TO_DEPARTMENT: &str = "back_department";
/// Callback data of the "Back" button on the semester menu
pub const BACK_TO_YEAR: &str = "back_year";

/// Returned when a code is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog code: {0}")]
pub struct UnknownCode(pub String);

/// Engineering departments offered in the first menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Cbme,
    Scbe,
    Scee,
    Sece,
    Smie,
    Site,
}

impl Department {
    /// All departments in menu order
    pub const ALL: [Department; 6] = [
        Department::Cbme,
        Department::Scbe,
        Department::Scee,
        Department::Sece,
        Department::Smie,
        Department::Site,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Department::Cbme => "CBME",
            Department::Scbe => "SCBE",
            Department::Scee => "SCEE",
            Department::Sece => "SECE",
            Department::Smie => "SMiE",
            Department::Site => "SiTE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Department::Cbme => "CBME (Biomedical)",
            Department::Scbe => "SCBE (Chemical)",
            Department::Scee => "SCEE (Civil)",
            Department::Sece => "SECE (Electrical)",
            Department::Smie => "SMiE (Mechanical)",
            Department::Site => "SiTE (Software)",
        }
    }
}

impl FromStr for Department {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Year of study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Year {
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Year {
    /// All years in menu order
    pub const ALL: [Year; 4] = [Year::Second, Year::Third, Year::Fourth, Year::Fifth];

    pub fn code(self) -> &'static str {
        match self {
            Year::Second => "Second",
            Year::Third => "Third",
            Year::Fourth => "Fourth",
            Year::Fifth => "Fifth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Year::Second => "Second year",
            Year::Third => "Third year",
            Year::Fourth => "Fourth year",
            Year::Fifth => "Fifth year",
        }
    }

    /// Semesters that can be picked for this year.
    ///
    /// Second year only has a channel for its second semester.
    pub fn semesters(self) -> &'static [Semester] {
        match self {
            Year::Second => &[Semester::Second],
            _ => &[Semester::First, Semester::Second],
        }
    }

    pub fn offers(self, semester: Semester) -> bool {
        self.semesters().contains(&semester)
    }
}

impl FromStr for Year {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Year::ALL
            .into_iter()
            .find(|y| y.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::First, Semester::Second];

    pub fn code(self) -> &'static str {
        match self {
            Semester::First => "1st",
            Semester::Second => "2nd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Semester::First => "1st semester",
            Semester::Second => "2nd semester",
        }
    }
}

impl FromStr for Semester {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semester::ALL
            .into_iter()
            .find(|sem| sem.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every (department, year, semester) combination the menus can produce
pub fn all_combinations() -> impl Iterator<Item = (Department, Year, Semester)> {
    Department::ALL.into_iter().flat_map(|department| {
        Year::ALL.into_iter().flat_map(move |year| {
            year.semesters()
                .iter()
                .map(move |&semester| (department, year, semester))
        })
    })
}
