//! Data structures for pages and recovered records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stats::StatsError;

/// One page of unprocessed text as produced by the extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    /// 1-based physical page number
    pub page_number: u32,
    pub text: String,
}

impl RawPage {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// A row recovered from a single line of page text.
///
/// All four fields are non-empty. Records carry no identity beyond their
/// values, so identical rows from different lines are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub person: String,
    pub division: String,
    pub group: String,
    pub department: String,
}

impl Record {
    pub fn new(
        person: impl Into<String>,
        division: impl Into<String>,
        group: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: person.into(),
            division: division.into(),
            group: group.into(),
            department: department.into(),
        }
    }

    /// Value of the given field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Person => &self.person,
            Field::Division => &self.division,
            Field::Group => &self.group,
            Field::Department => &self.department,
        }
    }
}

/// Records in page order, then line order within a page.
pub type RecordSet = Vec<Record>;

/// A column of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Person,
    Division,
    Group,
    Department,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 4] = [
        Field::Person,
        Field::Division,
        Field::Group,
        Field::Department,
    ];

    /// Lowercase field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Division => "division",
            Self::Group => "group",
            Self::Department => "department",
        }
    }

    /// Capitalised name for display headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Division => "Division",
            Self::Group => "Group",
            Self::Department => "Department",
        }
    }

    /// Plural display name for chart titles and axes.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Person => "Persons",
            Self::Division => "Divisions",
            Self::Group => "Groups",
            Self::Department => "Departments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person" => Ok(Self::Person),
            "division" => Ok(Self::Division),
            "group" => Ok(Self::Group),
            "department" => Ok(Self::Department),
            _ => Err(StatsError::UnknownField(s.to_string())),
        }
    }
}
