//! End-to-end sessions driven through the public REPL API.

use calcline::calculator::{LineReader, ReadError};
use calcline::{CalculatorConfig, Repl};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

struct ScriptedInput {
    lines: VecDeque<Result<String, ReadError>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| Ok(line.to_string())).collect(),
            prompts: Rc::default(),
        }
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.lines.pop_front().unwrap_or(Err(ReadError::Eof))
    }
}

struct Session {
    output: String,
    history_len: usize,
}

fn session(lines: &[&str]) -> Session {
    let config = CalculatorConfig {
        show_banner: false,
        ..CalculatorConfig::default()
    };
    let mut repl = Repl::new(ScriptedInput::new(lines), Vec::new(), config);
    repl.run().expect("session should not fail");

    Session {
        output: String::from_utf8(repl.output().clone()).unwrap(),
        history_len: repl.calculator().history().len(),
    }
}

#[test]
fn addition_is_displayed_and_recorded() {
    let result = session(&["5 + 3", "exit"]);

    assert!(result.output.contains("Result: 5 + 3 = 8"));
    assert_eq!(result.history_len, 1);
}

#[test]
fn word_operation_uses_symbol_in_output() {
    let result = session(&["10.5 subtract 2.3", "exit"]);

    assert!(result.output.contains("Result: 10.5 - 2.3 = 8.2"));
    assert_eq!(result.history_len, 1);
}

#[test]
fn division_by_zero_is_reported() {
    let result = session(&["5 + 3", "5 / 0", "exit"]);

    assert!(result.output.to_lowercase().contains("division by zero"));
    assert_eq!(result.history_len, 1);
}

#[test]
fn invalid_number_is_reported() {
    let result = session(&["abc + 3", "exit"]);

    assert!(result.output.contains("Invalid number format"));
    assert_eq!(result.history_len, 0);
}

#[test]
fn out_of_range_operand_is_reported_with_usage_hint() {
    let result = session(&["5 / 0.00000000000000000000000000001", "1e-29 + 0", "exit"]);

    assert!(result.output.contains(
        "Error: Number out of range: 0.00000000000000000000000000001 cannot be represented without rounding"
    ));
    assert!(result
        .output
        .contains("Error: Number out of range: 1e-29 cannot be represented without rounding"));
    assert!(!result.output.to_lowercase().contains("division by zero"));
    assert_eq!(
        result
            .output
            .matches("Use 'help' command for usage instructions.")
            .count(),
        2
    );
    assert_eq!(result.history_len, 0);
}

#[test]
fn unknown_operation_is_reported() {
    let result = session(&["5 % 3", "exit"]);

    assert!(result.output.contains("Unknown operation: %"));
    assert_eq!(result.history_len, 0);
}

#[test]
fn malformed_input_is_reported() {
    let result = session(&["5 + 3 + 2", "exit"]);

    assert!(result.output.contains("Invalid input format"));
    assert_eq!(result.history_len, 0);
}

#[test]
fn division_keeps_full_precision() {
    let result = session(&["1 divide 3", "exit"]);

    assert!(result
        .output
        .contains("Result: 1 / 3 = 0.3333333333333333333333333333"));
}

#[test]
fn clear_then_history_shows_empty() {
    let result = session(&["5 + 3", "7 * 8", "CLEAR", "History", "exit"]);

    assert!(result.output.contains("Calculation history cleared."));
    assert!(result.output.contains("No calculations in history."));
    assert_eq!(result.history_len, 0);
}

#[test]
fn commands_continue_after_errors() {
    let result = session(&["5 / 0", "abc", "", "2 * 3", "history", "exit"]);

    assert!(result.output.contains(" 1. 2 * 3 = 6"));
    assert_eq!(result.history_len, 1);
}

#[test]
fn configured_prompt_is_used_for_every_line() {
    let config = CalculatorConfig {
        prompt: "calc> ".to_string(),
        show_banner: false,
        ..CalculatorConfig::default()
    };
    let input = ScriptedInput::new(&["1 + 1", "exit"]);
    let prompts = Rc::clone(&input.prompts);
    let mut repl = Repl::new(input, Vec::new(), config);
    repl.run().unwrap();

    assert_eq!(*prompts.borrow(), vec!["calc> ".to_string(); 2]);
}
