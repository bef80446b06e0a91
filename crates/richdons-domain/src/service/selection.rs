//! Budget form state machine
//!
//! `Editing` holds the request being edited; `Calculate` freezes a breakdown
//! and moves to `Showing`, where only `Reset` is accepted. Transitions are
//! computed on a borrowed state and only swapped in on success, so a failed
//! transition never leaves a half-applied request behind.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use richdons_types::{AddOnService, Error, EventType, MenuTier, Result};

use super::estimator::{clamp_guest_count, compute_breakdown, guest_count_from_f64};
use crate::model::{PricingTable, QuoteBreakdown, QuoteRequest};

/// User action on the budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    UpdateGuestCount(i64),
    SetEventType(EventType),
    SetMenuTier(MenuTier),
    ToggleAddOn(AddOnService),
    Calculate,
    Reset,
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::UpdateGuestCount(_) => "update guest count",
            SelectionEvent::SetEventType(_) => "set event type",
            SelectionEvent::SetMenuTier(_) => "set menu tier",
            SelectionEvent::ToggleAddOn(_) => "toggle add-on",
            SelectionEvent::Calculate => "calculate",
            SelectionEvent::Reset => "reset",
        }
    }
}

/// Parses one command line, e.g. `guests 120`, `event corporate`,
/// `menu luxury`, `toggle staffing`, `calculate`, `reset`.
impl FromStr for SelectionEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let command = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.next();

        let require_arg = |arg: Option<&str>| -> Result<String> {
            arg.map(str::to_string).ok_or_else(|| {
                Error::InvalidCommand(format!("'{}' needs an argument", command))
            })
        };

        match command.as_str() {
            "guests" | "guest" => {
                let raw = require_arg(arg)?;
                let count = match raw.parse::<i64>() {
                    Ok(count) => count,
                    // Accept `75.0` from sliders and spreadsheets, reject NaN and fractions
                    Err(_) => raw
                        .parse::<f64>()
                        .map_err(|_| Error::InvalidGuestCount(format!("'{}' is not a number", raw)))
                        .and_then(guest_count_from_f64)?,
                };
                Ok(SelectionEvent::UpdateGuestCount(count))
            }
            "event" => Ok(SelectionEvent::SetEventType(require_arg(arg)?.parse()?)),
            "menu" | "tier" => Ok(SelectionEvent::SetMenuTier(require_arg(arg)?.parse()?)),
            "toggle" | "addon" | "add-on" => {
                Ok(SelectionEvent::ToggleAddOn(require_arg(arg)?.parse()?))
            }
            "calculate" | "calc" => Ok(SelectionEvent::Calculate),
            "reset" => Ok(SelectionEvent::Reset),
            other => Err(Error::InvalidCommand(format!("unknown command '{}'", other))),
        }
    }
}

/// Form state: either editing inputs or showing a frozen result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SelectionState {
    Editing {
        request: QuoteRequest,
    },
    Showing {
        request: QuoteRequest,
        breakdown: QuoteBreakdown,
    },
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::Editing {
            request: QuoteRequest::default(),
        }
    }
}

impl SelectionState {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::Editing { .. } => "editing",
            SelectionState::Showing { .. } => "showing results",
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, SelectionState::Editing { .. })
    }

    pub fn request(&self) -> &QuoteRequest {
        match self {
            SelectionState::Editing { request } | SelectionState::Showing { request, .. } => request,
        }
    }

    pub fn breakdown(&self) -> Option<&QuoteBreakdown> {
        match self {
            SelectionState::Editing { .. } => None,
            SelectionState::Showing { breakdown, .. } => Some(breakdown),
        }
    }

    /// Compute the state that follows `event`. `self` is never modified.
    pub fn apply(&self, event: SelectionEvent, table: &PricingTable) -> Result<SelectionState> {
        match (self, event) {
            (SelectionState::Editing { request }, SelectionEvent::UpdateGuestCount(n)) => {
                let guest_count = clamp_guest_count(n)?;
                Ok(SelectionState::Editing {
                    request: QuoteRequest {
                        guest_count: guest_count as i64,
                        ..request.clone()
                    },
                })
            }
            (SelectionState::Editing { request }, SelectionEvent::SetEventType(event_type)) => {
                Ok(SelectionState::Editing {
                    request: QuoteRequest {
                        event_type,
                        ..request.clone()
                    },
                })
            }
            (SelectionState::Editing { request }, SelectionEvent::SetMenuTier(menu_tier)) => {
                Ok(SelectionState::Editing {
                    request: QuoteRequest {
                        menu_tier,
                        ..request.clone()
                    },
                })
            }
            (SelectionState::Editing { request }, SelectionEvent::ToggleAddOn(service)) => {
                let mut request = request.clone();
                request.toggle_add_on(service);
                Ok(SelectionState::Editing { request })
            }
            (SelectionState::Editing { request }, SelectionEvent::Calculate) => {
                let breakdown = compute_breakdown(request, table)?;
                Ok(SelectionState::Showing {
                    request: request.clone(),
                    breakdown,
                })
            }
            (SelectionState::Showing { .. }, SelectionEvent::Reset) => Ok(SelectionState::default()),
            (state, event) => Err(Error::InvalidTransition {
                event: event.name(),
                state: state.name(),
            }),
        }
    }
}

/// One user's budget form, bound to a shared pricing table
#[derive(Debug, Clone)]
pub struct QuoteSession {
    table: Arc<PricingTable>,
    state: SelectionState,
}

impl QuoteSession {
    pub fn new(table: Arc<PricingTable>) -> Self {
        Self {
            table,
            state: SelectionState::default(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn request(&self) -> &QuoteRequest {
        self.state.request()
    }

    pub fn breakdown(&self) -> Option<&QuoteBreakdown> {
        self.state.breakdown()
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.table
    }

    /// Apply an event; on error the session is left exactly as it was
    pub fn dispatch(&mut self, event: SelectionEvent) -> Result<&SelectionState> {
        let next = self.state.apply(event, &self.table)?;
        self.state = next;
        Ok(&self.state)
    }

    pub fn update_guest_count(&mut self, guest_count: i64) -> Result<()> {
        self.dispatch(SelectionEvent::UpdateGuestCount(guest_count))
            .map(|_| ())
    }

    pub fn set_event_type(&mut self, event_type: EventType) -> Result<()> {
        self.dispatch(SelectionEvent::SetEventType(event_type)).map(|_| ())
    }

    pub fn set_menu_tier(&mut self, menu_tier: MenuTier) -> Result<()> {
        self.dispatch(SelectionEvent::SetMenuTier(menu_tier)).map(|_| ())
    }

    pub fn toggle_add_on(&mut self, service: AddOnService) -> Result<()> {
        self.dispatch(SelectionEvent::ToggleAddOn(service)).map(|_| ())
    }

    pub fn calculate(&mut self) -> Result<&QuoteBreakdown> {
        self.dispatch(SelectionEvent::Calculate)?;
        match &self.state {
            SelectionState::Showing { breakdown, .. } => Ok(breakdown),
            SelectionState::Editing { .. } => Err(Error::InvalidTransition {
                event: "calculate",
                state: "editing",
            }),
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        self.dispatch(SelectionEvent::Reset).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use richdons_types::CategoryKind;
    use rust_decimal::Decimal;

    fn table() -> Arc<PricingTable> {
        let mut table = PricingTable::default();
        for (event_type, rate) in EventType::ALL.into_iter().zip([85, 65, 55, 45]) {
            table = table.with_base_rate(event_type, Decimal::new(rate, 0));
        }
        for (menu_tier, tenths) in MenuTier::ALL.into_iter().zip([8, 10, 13, 16]) {
            table = table.with_multiplier(menu_tier, Decimal::new(tenths, 1));
        }
        for (service, price) in AddOnService::ALL.into_iter().zip([350, 500, 750, 300, 600]) {
            table = table.with_add_on_price(service, Decimal::new(price, 0));
        }
        Arc::new(table)
    }

    #[test]
    fn test_initial_state_is_editing_with_defaults() {
        let session = QuoteSession::new(table());
        assert!(session.state().is_editing());
        assert_eq!(session.request(), &QuoteRequest::default());
        assert!(session.breakdown().is_none());
    }

    #[test]
    fn test_edit_then_calculate() {
        let mut session = QuoteSession::new(table());
        session.toggle_add_on(AddOnService::Staffing).unwrap();
        session.toggle_add_on(AddOnService::Decoration).unwrap();
        let breakdown = session.calculate().unwrap();
        assert_eq!(breakdown.total, Decimal::new(5100, 0));
        assert!(!session.state().is_editing());
    }

    #[test]
    fn test_guest_count_clamping_flows_into_calculation() {
        let mut session = QuoteSession::new(table());
        session.update_guest_count(5).unwrap();
        assert_eq!(session.request().guest_count, 10);
        assert_eq!(session.calculate().unwrap().guest_count, 10);

        session.reset().unwrap();
        session.update_guest_count(1000).unwrap();
        assert_eq!(session.calculate().unwrap().guest_count, 500);
    }

    #[test]
    fn test_invalid_guest_count_leaves_state() {
        let mut session = QuoteSession::new(table());
        session.update_guest_count(120).unwrap();
        let before = session.state().clone();
        assert!(matches!(
            session.update_guest_count(0),
            Err(Error::InvalidGuestCount(_))
        ));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut session = QuoteSession::new(table());
        session.toggle_add_on(AddOnService::Photography).unwrap();
        let before = session.request().selected_add_ons.clone();
        session.toggle_add_on(AddOnService::Entertainment).unwrap();
        session.toggle_add_on(AddOnService::Entertainment).unwrap();
        assert_eq!(session.request().selected_add_ons, before);
    }

    #[test]
    fn test_only_reset_allowed_while_showing() {
        let table = table();
        let showing = SelectionState::default()
            .apply(SelectionEvent::Calculate, &table)
            .unwrap();

        let rejected = [
            SelectionEvent::UpdateGuestCount(100),
            SelectionEvent::SetEventType(EventType::Party),
            SelectionEvent::SetMenuTier(MenuTier::Luxury),
            SelectionEvent::ToggleAddOn(AddOnService::Staffing),
            SelectionEvent::Calculate,
        ];
        for event in rejected {
            let err = showing.apply(event, &table).unwrap_err();
            assert!(
                matches!(err, Error::InvalidTransition { state: "showing results", .. }),
                "{event:?}"
            );
        }
        assert!(showing.apply(SelectionEvent::Reset, &table).is_ok());
    }

    #[test]
    fn test_reset_not_allowed_while_editing() {
        let err = SelectionState::default()
            .apply(SelectionEvent::Reset, &table())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { event: "reset", state: "editing" }));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = QuoteSession::new(table());
        session.update_guest_count(300).unwrap();
        session.set_event_type(EventType::Festival).unwrap();
        session.set_menu_tier(MenuTier::Premium).unwrap();
        session.toggle_add_on(AddOnService::Transportation).unwrap();
        session.calculate().unwrap();
        session.reset().unwrap();
        assert_eq!(session.state(), &SelectionState::default());
    }

    #[test]
    fn test_calculate_failure_keeps_editing_and_request() {
        // Pricing without a festival rate
        let partial = PricingTable::default()
            .with_base_rate(EventType::Wedding, Decimal::new(85, 0))
            .with_multiplier(MenuTier::Standard, Decimal::ONE);
        let mut session = QuoteSession::new(Arc::new(partial));
        session.set_event_type(EventType::Festival).unwrap();
        session.update_guest_count(80).unwrap();
        let before = session.state().clone();

        let err = session.calculate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCategory { kind: CategoryKind::EventType, .. }
        ));
        assert!(session.state().is_editing());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "guests 120".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::UpdateGuestCount(120)
        );
        assert_eq!(
            "event corporate".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::SetEventType(EventType::Corporate)
        );
        assert_eq!(
            "TOGGLE photography".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::ToggleAddOn(AddOnService::Photography)
        );
        assert_eq!("calc".parse::<SelectionEvent>().unwrap(), SelectionEvent::Calculate);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "event gala".parse::<SelectionEvent>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCategory { kind: CategoryKind::EventType, .. }
        ));
        assert!(matches!(
            "guests lots".parse::<SelectionEvent>(),
            Err(Error::InvalidGuestCount(_))
        ));
        assert!("menu".parse::<SelectionEvent>().is_err());
    }

    #[test]
    fn test_parse_guest_count_from_decimal_text() {
        assert_eq!(
            "guests 75.0".parse::<SelectionEvent>().unwrap(),
            SelectionEvent::UpdateGuestCount(75)
        );
        for line in ["guests 12.5", "guests NaN", "guests inf"] {
            assert!(
                matches!(line.parse::<SelectionEvent>(), Err(Error::InvalidGuestCount(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn test_parse_bad_command_is_invalid_command() {
        let err = "dance".parse::<SelectionEvent>().unwrap_err();
        assert!(matches!(err, Error::InvalidCommand(_)));
        assert_eq!(err.to_string(), "Invalid command: unknown command 'dance'");

        assert!(matches!(
            "menu".parse::<SelectionEvent>(),
            Err(Error::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_state_serializes_with_tag() {
        let json = serde_json::to_value(SelectionState::default()).unwrap();
        assert_eq!(json["state"], "editing");
        assert_eq!(json["request"]["guest_count"], 50);
    }
}
