//! Line-oriented session driver
//!
//! Each input line is one of the selection events understood by
//! `SelectionEvent` (`guests 120`, `event party`, `menu premium`,
//! `toggle staffing`, `calculate`, `reset`) or a session command
//! (`show`, `quit`). Blank lines and `#` comments are ignored.

use richdons_domain::service::{QuoteSession, SelectionEvent};
use richdons_types::Result;

/// What a processed line did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing to do (blank or comment)
    Skipped,
    /// An edit was applied while editing
    Edited,
    /// A breakdown was calculated and is now shown
    Calculated,
    /// The form was reset to defaults
    Reset,
    /// Caller should display the current state
    Show,
    /// Caller should stop reading input
    Quit,
}

/// Apply one input line to the session.
///
/// Errors are returned without touching the session, so the caller can
/// report them and keep reading.
pub fn apply_line(session: &mut QuoteSession, line: &str) -> Result<LineOutcome> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(LineOutcome::Skipped);
    }

    match line.to_ascii_lowercase().as_str() {
        "show" | "status" => return Ok(LineOutcome::Show),
        "quit" | "exit" => return Ok(LineOutcome::Quit),
        _ => {}
    }

    let event: SelectionEvent = line.parse()?;
    session.dispatch(event)?;
    tracing::debug!(event = event.name(), state = session.state().name(), "session event applied");

    Ok(match event {
        SelectionEvent::Calculate => LineOutcome::Calculated,
        SelectionEvent::Reset => LineOutcome::Reset,
        _ => LineOutcome::Edited,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::QuoteService;
    use richdons_types::{Error, EventType};
    use rust_decimal::Decimal;

    #[test]
    fn test_script_flow() {
        let mut session = QuoteService::standard().new_session();
        let script = [
            ("# corporate lunch", LineOutcome::Skipped),
            ("guests 100", LineOutcome::Edited),
            ("event corporate", LineOutcome::Edited),
            ("menu luxury", LineOutcome::Edited),
            ("show", LineOutcome::Show),
            ("calculate", LineOutcome::Calculated),
        ];
        for (line, expected) in script {
            assert_eq!(apply_line(&mut session, line).unwrap(), expected, "{line}");
        }
        assert_eq!(session.breakdown().unwrap().total, Decimal::new(10400, 0));
        assert_eq!(apply_line(&mut session, "reset").unwrap(), LineOutcome::Reset);
        assert_eq!(apply_line(&mut session, "QUIT").unwrap(), LineOutcome::Quit);
    }

    #[test]
    fn test_bad_line_leaves_session() {
        let mut session = QuoteService::standard().new_session();
        apply_line(&mut session, "event party").unwrap();
        let before = session.state().clone();

        assert!(matches!(
            apply_line(&mut session, "event gala"),
            Err(Error::InvalidCategory { .. })
        ));
        assert!(matches!(
            apply_line(&mut session, "dance"),
            Err(Error::InvalidCommand(_))
        ));
        assert_eq!(session.state(), &before);
        assert_eq!(session.request().event_type, EventType::Party);
    }

    #[test]
    fn test_edit_while_showing_rejected() {
        let mut session = QuoteService::standard().new_session();
        apply_line(&mut session, "calculate").unwrap();
        assert!(matches!(
            apply_line(&mut session, "toggle staffing"),
            Err(Error::InvalidTransition { .. })
        ));
        assert!(session.breakdown().is_some());
    }
}
