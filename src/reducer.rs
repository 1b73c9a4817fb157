use crate::calculator::{Calculator, Operation};

// 0-9 or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Digit(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDigit(Digit),
    ChooseOperation(Operation),
    Clear,
    DeleteDigit,
    Evaluate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// Digits being typed; holds at most one `.`.
    pub current_operand: Option<String>,
    /// Left-hand side of the pending operation.
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of appending to it.
    pub overwrite: bool,
}

impl CalculatorState {
    fn evaluate(&self) -> String {
        Calculator::evaluate(
            self.previous_operand.as_deref(),
            self.current_operand.as_deref(),
            self.operation,
        )
    }
}

pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    match *action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let d = digit.as_char();

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(d.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref();
    if d == '0' && current == Some("0") {
        return state.clone();
    }
    if d == '.' && current.is_some_and(|c| c.contains('.')) {
        return state.clone();
    }

    let mut operand = current.unwrap_or_default().to_string();
    operand.push(d);
    CalculatorState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),
        (None, Some(_)) => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        },
        // Fold the pending computation before starting the next one.
        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(state.evaluate()),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        },
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = &state.current_operand else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

fn evaluate(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(state.evaluate()),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Action {
        Action::AddDigit(Digit::new(c).unwrap())
    }

    fn run(actions: &[Action]) -> CalculatorState {
        actions
            .iter()
            .fold(CalculatorState::default(), |state, action| reduce(&state, action))
    }

    fn typed(s: &str) -> Vec<Action> {
        s.chars().map(digit).collect()
    }

    fn state(
        current: Option<&str>,
        previous: Option<&str>,
        op: Option<Operation>,
        overwrite: bool,
    ) -> CalculatorState {
        CalculatorState {
            current_operand: current.map(str::to_string),
            previous_operand: previous.map(str::to_string),
            operation: op,
            overwrite,
        }
    }

    #[test]
    fn test_digit_rejects_non_keypad_chars() {
        assert!(Digit::new('7').is_some());
        assert!(Digit::new('.').is_some());
        assert!(Digit::new('a').is_none());
        assert!(Digit::new('-').is_none());
    }

    #[test]
    fn test_typing_appends() {
        assert_eq!(run(&typed("12.5")).current_operand.as_deref(), Some("12.5"));
        assert_eq!(run(&typed(".5")).current_operand.as_deref(), Some(".5"));
    }

    #[test]
    fn test_overwrite_replaces_operand() {
        let before = state(Some("42"), Some("9"), Some(Operation::Add), true);
        let after = reduce(&before, &digit('7'));
        assert_eq!(after, state(Some("7"), Some("9"), Some(Operation::Add), false));

        let after = reduce(&state(None, None, None, true), &digit('.'));
        assert_eq!(after, state(Some("."), None, None, false));
    }

    #[test]
    fn test_repeated_leading_zero_is_ignored() {
        let zero = state(Some("0"), None, None, false);
        assert_eq!(reduce(&zero, &digit('0')), zero);
        assert_eq!(run(&typed("000")).current_operand.as_deref(), Some("0"));
        assert_eq!(run(&typed("05")).current_operand.as_deref(), Some("05"));
    }

    #[test]
    fn test_single_decimal_point() {
        let s = state(Some("1.2"), None, None, false);
        assert_eq!(reduce(&s, &digit('.')), s);
        assert_eq!(run(&typed("1..2.3")).current_operand.as_deref(), Some("1.23"));
    }

    #[test]
    fn test_choose_operation_without_operands_is_noop() {
        let empty = CalculatorState::default();
        assert_eq!(reduce(&empty, &Action::ChooseOperation(Operation::Add)), empty);
    }

    #[test]
    fn test_first_operation_moves_operand_up() {
        let mut actions = typed("12");
        actions.push(Action::ChooseOperation(Operation::Multiply));
        assert_eq!(run(&actions), state(None, Some("12"), Some(Operation::Multiply), false));
    }

    #[test]
    fn test_operation_replaced_before_next_operand() {
        let mut actions = typed("12");
        actions.push(Action::ChooseOperation(Operation::Multiply));
        actions.push(Action::ChooseOperation(Operation::Subtract));
        assert_eq!(run(&actions), state(None, Some("12"), Some(Operation::Subtract), false));
    }

    #[test]
    fn test_chained_operations_fold_left_to_right() {
        let mut actions = typed("6");
        actions.push(Action::ChooseOperation(Operation::Add));
        actions.extend(typed("4"));
        actions.push(Action::ChooseOperation(Operation::Multiply));

        let folded = run(&actions);
        assert_eq!(folded, state(None, Some("10"), Some(Operation::Multiply), false));

        actions.extend(typed("2"));
        actions.push(Action::Evaluate);
        assert_eq!(run(&actions), state(Some("20"), None, None, true));
    }

    #[test]
    fn test_clear_from_any_state() {
        let states = [
            CalculatorState::default(),
            state(Some("1"), None, None, false),
            state(Some("1"), Some("2"), Some(Operation::Divide), true),
            state(None, Some("2"), Some(Operation::Add), false),
        ];
        for s in states {
            assert_eq!(reduce(&s, &Action::Clear), CalculatorState::default());
        }
    }

    #[test]
    fn test_delete_digit() {
        let s = state(Some("123"), None, None, false);
        assert_eq!(reduce(&s, &Action::DeleteDigit).current_operand.as_deref(), Some("12"));

        let single = state(Some("7"), Some("1"), Some(Operation::Add), false);
        assert_eq!(
            reduce(&single, &Action::DeleteDigit),
            state(None, Some("1"), Some(Operation::Add), false)
        );

        let absent = state(None, Some("1"), Some(Operation::Add), false);
        assert_eq!(reduce(&absent, &Action::DeleteDigit), absent);
    }

    #[test]
    fn test_delete_after_evaluate_clears_result() {
        let s = state(Some("20"), None, None, true);
        assert_eq!(reduce(&s, &Action::DeleteDigit), CalculatorState::default());
    }

    #[test]
    fn test_repeated_delete_never_leaves_empty_string() {
        let mut s = state(Some("9.75"), None, None, false);
        for _ in 0..10 {
            s = reduce(&s, &Action::DeleteDigit);
            assert_ne!(s.current_operand.as_deref(), Some(""));
        }
        assert_eq!(s.current_operand, None);
    }

    #[test]
    fn test_delete_trims_result_literal() {
        let s = state(Some("-Infinity"), None, None, false);
        assert_eq!(reduce(&s, &Action::DeleteDigit).current_operand.as_deref(), Some("-Infinit"));
    }

    #[test]
    fn test_evaluate_requires_complete_expression() {
        let partials = [
            CalculatorState::default(),
            state(Some("1"), None, None, false),
            state(None, Some("1"), Some(Operation::Add), false),
            state(Some("1"), Some("2"), None, false),
        ];
        for s in partials {
            assert_eq!(reduce(&s, &Action::Evaluate), s);
        }
    }

    #[test]
    fn test_digit_after_evaluate_starts_fresh() {
        let mut actions = typed("3");
        actions.push(Action::ChooseOperation(Operation::Divide));
        actions.extend(typed("4"));
        actions.push(Action::Evaluate);
        assert_eq!(run(&actions).current_operand.as_deref(), Some("0.75"));

        actions.push(digit('5'));
        assert_eq!(run(&actions), state(Some("5"), None, None, false));
    }

    #[test]
    fn test_failed_fold_leaves_empty_operand() {
        let mut actions = typed("0");
        actions.push(Action::ChooseOperation(Operation::Divide));
        actions.extend(typed("0"));
        actions.push(Action::Evaluate);
        assert_eq!(run(&actions), state(Some("NaN"), None, None, true));

        actions.push(Action::ChooseOperation(Operation::Add));
        actions.extend(typed("5"));
        actions.push(Action::ChooseOperation(Operation::Multiply));
        assert_eq!(run(&actions), state(None, Some(""), Some(Operation::Multiply), false));

        actions.extend(typed("2"));
        actions.push(Action::Evaluate);
        assert_eq!(run(&actions), state(Some(""), None, None, true));
    }

    #[test]
    fn test_divide_by_zero_flows_through_state() {
        let mut actions = typed("8");
        actions.push(Action::ChooseOperation(Operation::Divide));
        actions.extend(typed("0"));
        actions.push(Action::ChooseOperation(Operation::Add));
        actions.extend(typed("1"));
        actions.push(Action::Evaluate);
        assert_eq!(run(&actions).current_operand.as_deref(), Some("Infinity"));
    }
}
