//! Course selection dialogue module for per-user conversation state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Department, Semester, Year};

/// Represents the conversation state of the course selection dialogue.
///
/// Each state carries exactly the selections made so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    #[default]
    AwaitingDepartment,
    AwaitingYear {
        department: Department,
    },
    AwaitingSemester {
        department: Department,
        year: Year,
    },
    Completed {
        department: Department,
        year: Year,
        semester: Semester,
    },
}

/// Field-less view of [`DialogueState`], used for logging and matching
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    AwaitingDepartment,
    AwaitingYear,
    AwaitingSemester,
    Completed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitingDepartment => "awaiting_department",
            Stage::AwaitingYear => "awaiting_year",
            Stage::AwaitingSemester => "awaiting_semester",
            Stage::Completed => "completed",
        };
        f.write_str(name)
    }
}

impl DialogueState {
    pub fn stage(&self) -> Stage {
        match self {
            DialogueState::AwaitingDepartment => Stage::AwaitingDepartment,
            DialogueState::AwaitingYear { .. } => Stage::AwaitingYear,
            DialogueState::AwaitingSemester { .. } => Stage::AwaitingSemester,
            DialogueState::Completed { .. } => Stage::Completed,
        }
    }
}

/// Per-user conversational progress
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u64,
    pub state: DialogueState,
}

impl Session {
    /// Fresh session waiting for a department
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            state: DialogueState::AwaitingDepartment,
        }
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn department(&self) -> Option<Department> {
        match self.state {
            DialogueState::AwaitingDepartment => None,
            DialogueState::AwaitingYear { department }
            | DialogueState::AwaitingSemester { department, .. }
            | DialogueState::Completed { department, .. } => Some(department),
        }
    }

    pub fn year(&self) -> Option<Year> {
        match self.state {
            DialogueState::AwaitingSemester { year, .. } | DialogueState::Completed { year, .. } => {
                Some(year)
            }
            _ => None,
        }
    }

    pub fn semester(&self) -> Option<Semester> {
        match self.state {
            DialogueState::Completed { semester, .. } => Some(semester),
            _ => None,
        }
    }
}
