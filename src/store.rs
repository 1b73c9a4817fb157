use crate::format::format_operand;
use crate::reducer::{reduce, Action, CalculatorState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText {
    /// Previous operand followed by the pending operation symbol.
    pub previous: String,
    pub current: String,
}

/// Owns the calculator state for one window; only `dispatch` changes it.
#[derive(Debug, Default)]
pub struct CalculatorStore {
    state: CalculatorState,
}

impl CalculatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = reduce(&self.state, &action);
        if next == self.state {
            tracing::trace!(?action, "action left state unchanged");
        } else {
            tracing::debug!(?action, state = ?next, "state updated");
        }
        self.state = next;
        &self.state
    }

    pub fn display(&self) -> DisplayText {
        let previous = format_operand(self.state.previous_operand.as_deref());
        let previous = match (previous, self.state.operation) {
            (Some(operand), Some(op)) => format!("{operand} {op}"),
            (Some(operand), None) => operand,
            (None, Some(op)) => op.to_string(),
            (None, None) => String::new(),
        };

        DisplayText {
            previous,
            current: format_operand(self.state.current_operand.as_deref()).unwrap_or_default(),
        }
    }

    /// Raw current operand, as copied to the clipboard.
    pub fn current_value(&self) -> Option<&str> {
        self.state
            .current_operand
            .as_deref()
            .filter(|operand| !operand.is_empty())
    }
}
