//! # Conversation Engine Module
//!
//! Owns the per-user sessions of the department → year → semester dialogue,
//! applies transitions and resolves the final channel link. The engine knows
//! nothing about Telegram: it returns [`Reply`] values for a transport to draw.
//!
//! Events for one user are serialized through a per-user lock; events for
//! different users never contend beyond the short lookup of their lock.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::catalog::{Department, Semester, Year, BACK_TO_DEPARTMENT, BACK_TO_YEAR};
use crate::dialogue::{DialogueState, Session, Stage};
use crate::engine_errors::{EngineError, EngineResult};
use crate::links::{LinkKey, LinkTable};
use crate::localization::t;
use crate::menus::{department_menu, semester_menu, year_menu, Menu, RenderMode, Reply};

type SessionSlot = Arc<Mutex<Option<Session>>>;

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Session as left by the event. A completed session is reported here
    /// but is no longer stored; `None` means no session remains.
    pub session: Option<Session>,
    /// Render instructions, in the order they must be delivered
    pub replies: Vec<Reply>,
}

impl Outcome {
    pub fn stage(&self) -> Option<Stage> {
        self.session.as_ref().map(Session::stage)
    }
}

pub struct ConversationEngine {
    sessions: Mutex<HashMap<u64, SessionSlot>>,
    links: LinkTable,
}

impl ConversationEngine {
    pub fn new(links: LinkTable) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            links,
        }
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    /// Snapshot of the stored session for `user_id`
    pub async fn session(&self, user_id: u64) -> Option<Session> {
        let slot = self.lock_existing(user_id).await?;
        let session = slot.clone();
        self.release(user_id, slot).await;
        session
    }

    /// Number of users currently holding a session slot
    pub async fn tracked_users(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Acquire the per-user lock, creating the slot on first contact
    async fn lock(&self, user_id: u64) -> OwnedMutexGuard<Option<Session>> {
        let slot = {
            let mut sessions = self.sessions.lock().await;
            Arc::clone(sessions.entry(user_id).or_default())
        };
        slot.lock_owned().await
    }

    /// Acquire the per-user lock only if the user already has a slot
    async fn lock_existing(&self, user_id: u64) -> Option<OwnedMutexGuard<Option<Session>>> {
        let slot = self.sessions.lock().await.get(&user_id).cloned()?;
        Some(slot.lock_owned().await)
    }

    /// Drop the per-user lock, removing the slot once it is empty and no
    /// other event holds or waits on it.
    async fn release(&self, user_id: u64, slot: OwnedMutexGuard<Option<Session>>) {
        if slot.is_some() {
            return;
        }

        let mut sessions = self.sessions.lock().await;
        let unshared = sessions.get(&user_id).is_some_and(|entry| {
            // One reference in the map, one in this guard
            Arc::ptr_eq(entry, OwnedMutexGuard::mutex(&slot)) && Arc::strong_count(entry) == 2
        });
        if unshared {
            sessions.remove(&user_id);
        }
    }

    /// Start (or restart) the dialogue: intro text followed by the department menu
    pub async fn handle_start(&self, user_id: u64) -> Outcome {
        let mut slot = self.lock(user_id).await;
        let session = Session::new(user_id);
        *slot = Some(session.clone());
        info!(user_id, "Started course selection");

        Outcome {
            session: Some(session),
            replies: vec![
                Reply::Text(t("intro-message")),
                Reply::Menu {
                    mode: RenderMode::Send,
                    menu: department_menu(),
                },
            ],
        }
    }

    /// Show the department menu and put the session back to the first step.
    ///
    /// An existing session is kept and its selections are cleared; a missing
    /// one is created.
    pub async fn render_department_menu(&self, user_id: u64, mode: RenderMode) -> Outcome {
        let mut slot = self.lock(user_id).await;
        Self::reset_to_departments(&mut slot, user_id, mode)
    }

    pub async fn select_department(&self, user_id: u64, choice: &str) -> EngineResult<Outcome> {
        let mut slot = self.lock(user_id).await;
        let result = Self::apply_department(&mut slot, user_id, choice);
        self.release(user_id, slot).await;
        result
    }

    pub async fn select_year(&self, user_id: u64, choice: &str) -> EngineResult<Outcome> {
        let mut slot = self.lock(user_id).await;
        let result = Self::apply_year(&mut slot, user_id, choice);
        self.release(user_id, slot).await;
        result
    }

    pub async fn select_semester(&self, user_id: u64, choice: &str) -> EngineResult<Outcome> {
        let mut slot = self.lock(user_id).await;
        let result = self.apply_semester(&mut slot, user_id, choice);
        self.release(user_id, slot).await;
        result
    }

    /// Route a button press to the step the user is on.
    ///
    /// Unknown data re-renders the current menu without touching the session.
    /// A press without a session behaves like a start and shows the
    /// department menu; the pressed data is not applied.
    pub async fn handle_callback(&self, user_id: u64, data: &str) -> Outcome {
        let mut slot = self.lock(user_id).await;

        let result = match slot.as_ref().map(Session::stage) {
            Some(Stage::AwaitingDepartment) => Self::apply_department(&mut slot, user_id, data),
            Some(Stage::AwaitingYear) => Self::apply_year(&mut slot, user_id, data),
            Some(Stage::AwaitingSemester) => self.apply_semester(&mut slot, user_id, data),
            Some(Stage::Completed) | None => Err(EngineError::NoActiveSession { user_id }),
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(EngineError::NoActiveSession { .. }) => {
                info!(user_id, data, "Callback without session, showing department menu");
                Self::reset_to_departments(&mut slot, user_id, RenderMode::Edit)
            }
            Err(err @ EngineError::InvalidSelection { .. }) => {
                warn!(user_id, error = %err, "Ignoring selection, re-rendering current menu");
                let replies = slot
                    .as_ref()
                    .and_then(|session| menu_for(&session.state))
                    .map(|menu| Reply::Menu {
                        mode: RenderMode::Edit,
                        menu,
                    })
                    .into_iter()
                    .collect();
                Outcome {
                    session: slot.clone(),
                    replies,
                }
            }
        };

        self.release(user_id, slot).await;
        outcome
    }

    /// Discard the session from any state
    pub async fn handle_stop(&self, user_id: u64) -> Outcome {
        if let Some(mut slot) = self.lock_existing(user_id).await {
            if let Some(previous) = slot.take() {
                info!(user_id, stage = %previous.stage(), "Conversation stopped");
            }
            self.release(user_id, slot).await;
        }

        Outcome {
            session: None,
            replies: vec![Reply::Text(t("conversation-stopped"))],
        }
    }

    /// Free text instead of a button press; the session is left alone
    pub async fn handle_unrecognized_text(&self, user_id: u64) -> Outcome {
        debug!(user_id, "Free text received, pointing user at the menu");

        Outcome {
            session: self.session(user_id).await,
            replies: vec![Reply::Text(t("use-buttons"))],
        }
    }

    fn reset_to_departments(slot: &mut Option<Session>, user_id: u64, mode: RenderMode) -> Outcome {
        let session = slot.get_or_insert_with(|| Session::new(user_id));
        session.state = DialogueState::AwaitingDepartment;

        Outcome {
            session: Some(session.clone()),
            replies: vec![Reply::Menu {
                mode,
                menu: department_menu(),
            }],
        }
    }

    fn apply_department(
        slot: &mut Option<Session>,
        user_id: u64,
        choice: &str,
    ) -> EngineResult<Outcome> {
        let session = slot
            .as_mut()
            .ok_or(EngineError::NoActiveSession { user_id })?;
        if session.state != DialogueState::AwaitingDepartment {
            return Err(invalid(choice, session));
        }

        let department: Department = choice.parse().map_err(|_| invalid(choice, session))?;
        session.state = DialogueState::AwaitingYear { department };
        info!(user_id, department = %department, "Department selected");

        Ok(Outcome {
            session: Some(session.clone()),
            replies: vec![Reply::Menu {
                mode: RenderMode::Edit,
                menu: year_menu(),
            }],
        })
    }

    fn apply_year(slot: &mut Option<Session>, user_id: u64, choice: &str) -> EngineResult<Outcome> {
        let session = slot
            .as_mut()
            .ok_or(EngineError::NoActiveSession { user_id })?;
        let DialogueState::AwaitingYear { department } = session.state else {
            return Err(invalid(choice, session));
        };

        let menu = if choice == BACK_TO_DEPARTMENT {
            session.state = DialogueState::AwaitingDepartment;
            info!(user_id, "Back to department selection");
            department_menu()
        } else {
            let year: Year = choice.parse().map_err(|_| invalid(choice, session))?;
            session.state = DialogueState::AwaitingSemester { department, year };
            info!(user_id, year = %year, "Year selected");
            semester_menu(year)
        };

        Ok(Outcome {
            session: Some(session.clone()),
            replies: vec![Reply::Menu {
                mode: RenderMode::Edit,
                menu,
            }],
        })
    }

    fn apply_semester(
        &self,
        slot: &mut Option<Session>,
        user_id: u64,
        choice: &str,
    ) -> EngineResult<Outcome> {
        let session = slot
            .as_mut()
            .ok_or(EngineError::NoActiveSession { user_id })?;
        let DialogueState::AwaitingSemester { department, year } = session.state else {
            return Err(invalid(choice, session));
        };

        if choice == BACK_TO_YEAR {
            session.state = DialogueState::AwaitingYear { department };
            info!(user_id, "Back to year selection");
            return Ok(Outcome {
                session: Some(session.clone()),
                replies: vec![Reply::Menu {
                    mode: RenderMode::Edit,
                    menu: year_menu(),
                }],
            });
        }

        let semester: Semester = match choice.parse() {
            Ok(semester) if year.offers(semester) => semester,
            _ => return Err(invalid(choice, session)),
        };

        session.state = DialogueState::Completed {
            department,
            year,
            semester,
        };
        let key = LinkKey::new(department, year, semester);
        let url = self.links.resolve(&key).to_string();
        info!(user_id, link_key = %key, "Course selection completed");

        // Completion ends the dialogue; the next press starts over
        let completed = slot.take();

        Ok(Outcome {
            session: completed,
            replies: vec![Reply::Link {
                mode: RenderMode::Edit,
                caption: t("link-caption"),
                label: t("link-label"),
                url,
            }],
        })
    }
}

/// Menu shown while waiting in `state`
pub fn menu_for(state: &DialogueState) -> Option<Menu> {
    match state {
        DialogueState::AwaitingDepartment => Some(department_menu()),
        DialogueState::AwaitingYear { .. } => Some(year_menu()),
        DialogueState::AwaitingSemester { year, .. } => Some(semester_menu(*year)),
        DialogueState::Completed { .. } => None,
    }
}

fn invalid(choice: &str, session: &Session) -> EngineError {
    EngineError::InvalidSelection {
        data: choice.to_string(),
        stage: session.stage(),
    }
}
