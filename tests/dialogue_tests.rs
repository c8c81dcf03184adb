use anyhow::Result;

use course_info_bot::catalog::{Department, Semester, Year};
use course_info_bot::dialogue::{DialogueState, Session, Stage};

/// Test dialogue state transitions keep only the selections made so far
#[tokio::test]
async fn test_session_fields_per_state() -> Result<()> {
    let mut session = Session::new(11);
    assert_eq!(session.stage(), Stage::AwaitingDepartment);

    session.state = DialogueState::AwaitingYear {
        department: Department::Scee,
    };
    assert_eq!(session.department(), Some(Department::Scee));
    assert_eq!(session.year(), None);

    session.state = DialogueState::Completed {
        department: Department::Scee,
        year: Year::Third,
        semester: Semester::Second,
    };
    assert_eq!(session.stage(), Stage::Completed);
    assert_eq!(session.year(), Some(Year::Third));
    assert_eq!(session.semester(), Some(Semester::Second));

    Ok(())
}

/// Test that dialogue states can be serialized/deserialized with serde_json
#[tokio::test]
async fn test_dialogue_state_serialization() -> Result<()> {
    let session = Session {
        user_id: 99,
        state: DialogueState::AwaitingSemester {
            department: Department::Smie,
            year: Year::Second,
        },
    };

    let json = serde_json::to_string(&session)?;
    let restored: Session = serde_json::from_str(&json)?;
    assert_eq!(restored, session);

    Ok(())
}

/// Unit test for the default state
#[test]
fn test_default_state() {
    let default_state = DialogueState::default();
    assert!(matches!(default_state, DialogueState::AwaitingDepartment));
    assert_eq!(default_state.stage().to_string(), "awaiting_department");
}
