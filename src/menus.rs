//! # Menus Module
//!
//! Render instructions produced by the conversation engine. They describe
//! what to show, not how a particular chat platform draws it.

use crate::catalog::{Department, Year, BACK_TO_DEPARTMENT, BACK_TO_YEAR};
use crate::localization::t;

/// Whether a reply is a new message or replaces the menu message in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Send,
    Edit,
}

/// One selectable button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub data: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// A prompt plus its ordered options, one button per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub prompt: String,
    pub options: Vec<MenuOption>,
}

impl Menu {
    /// Callback data of every option, in order
    pub fn data(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.data.as_str()).collect()
    }
}

/// Render instruction emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text message
    Text(String),
    /// Menu sent as a new message or edited into the current one
    Menu { mode: RenderMode, menu: Menu },
    /// Final answer carrying the resolved channel link
    Link {
        mode: RenderMode,
        caption: String,
        label: String,
        url: String,
    },
}

pub fn department_menu() -> Menu {
    Menu {
        prompt: t("choose-department"),
        options: Department::ALL
            .into_iter()
            .map(|d| MenuOption::new(d.label(), d.code()))
            .collect(),
    }
}

pub fn year_menu() -> Menu {
    let mut options: Vec<MenuOption> = Year::ALL
        .into_iter()
        .map(|y| MenuOption::new(y.label(), y.code()))
        .collect();
    options.push(MenuOption::new(t("back-button"), BACK_TO_DEPARTMENT));

    Menu {
        prompt: t("choose-year"),
        options,
    }
}

pub fn semester_menu(year: Year) -> Menu {
    let mut options: Vec<MenuOption> = year
        .semesters()
        .iter()
        .map(|s| MenuOption::new(s.label(), s.code()))
        .collect();
    options.push(MenuOption::new(t("back-button"), BACK_TO_YEAR));

    Menu {
        prompt: t("choose-semester"),
        options,
    }
}
