//! End-to-end scenarios driven through keypad buttons and keyboard keys.

use keycalc::core::{HistoryEntry, Phase};
use keycalc::input::{command_for_key, Key, KeyScript, KeypadButton};
use keycalc::machine::{Calculator, Command};
use keycalc::CalculatorBuilder;

fn press(calc: Calculator, buttons: &[KeypadButton]) -> Calculator {
    buttons
        .iter()
        .filter_map(KeypadButton::command)
        .fold(calc, |calc, command| calc.apply(&command))
}

fn type_line(calc: Calculator, line: &str) -> Calculator {
    KeyScript::parse(line)
        .unwrap()
        .commands()
        .iter()
        .fold(calc, |calc, command| calc.apply(command))
}

fn evaluated(expr: &str) -> Calculator {
    Calculator::new().append(expr).evaluate()
}

#[test]
fn two_plus_two_via_keypad() {
    let calc = press(
        Calculator::new(),
        &[
            KeypadButton::value("2"),
            KeypadButton::op("+"),
            KeypadButton::value("2"),
            KeypadButton::action("equals"),
        ],
    );

    let view = calc.render();
    assert_eq!(view.result, "4");
    assert_eq!(view.expression, "4");
    assert_eq!(calc.history().entries(), &[HistoryEntry::new("2+2", "4")]);
}

#[test]
fn division_by_zero_shows_infinity_and_keeps_expression() {
    let calc = evaluated("1/0");
    assert_eq!(calc.phase(), Phase::Resulted);
    assert_eq!(calc.render().result, "∞");
    assert_eq!(calc.buffer(), "1/0");
    assert_eq!(calc.history().entries(), &[HistoryEntry::new("1/0", "∞")]);
}

#[test]
fn zero_over_zero_is_an_error() {
    let calc = evaluated("0/0");
    assert_eq!(calc.phase(), Phase::Errored);
    assert_eq!(calc.render().result, "Error");
    assert_eq!(calc.buffer(), "0/0");
    assert!(calc.history().is_empty());
}

#[test]
fn scientific_functions() {
    assert_eq!(evaluated("√(9)").buffer(), "3");
    assert_eq!(evaluated("2^3").buffer(), "8");
    assert_eq!(evaluated("log(100)").buffer(), "2");
    assert_eq!(evaluated("ln(e)").buffer(), "1");
    assert_eq!(evaluated("10/3").buffer(), "3.3333333333");
}

#[test]
fn function_buttons_build_calculator_notation() {
    let calc = press(
        Calculator::new(),
        &[
            KeypadButton::function("sqrt"),
            KeypadButton::value("1"),
            KeypadButton::value("6"),
            KeypadButton::op(")"),
            KeypadButton::op("+"),
            KeypadButton::function("sin"),
            KeypadButton::value("0"),
            KeypadButton::op(")"),
            KeypadButton::op("*"),
            KeypadButton::function("pi"),
        ],
    );
    assert_eq!(calc.buffer(), "√(16)+sin(0)*π");

    let calc = press(calc, &[KeypadButton::action("equals")]);
    assert_eq!(calc.buffer(), "4");
}

#[test]
fn clear_and_clear_all_buttons() {
    let calc = press(
        Calculator::new(),
        &[
            KeypadButton::value("1"),
            KeypadButton::value("2"),
            KeypadButton::action("clear"),
        ],
    );
    assert_eq!(calc.buffer(), "1");

    let calc = press(calc, &[KeypadButton::action("clear-all")]);
    assert_eq!(calc.buffer(), "");
    assert_eq!(calc.render().result, "0");
}

#[test]
fn keyboard_session() {
    let calc = type_line(Calculator::new(), "2^10");
    assert_eq!(calc.buffer(), "1024");

    let calc = type_line(calc, "/4");
    assert_eq!(calc.buffer(), "256");

    let calc = type_line(calc, "r256){hold}");
    assert_eq!(calc.buffer(), "256√(256)");
    assert_eq!(calc.phase(), Phase::Editing);

    let calc = type_line(calc, "{escape}p*2{hold}");
    assert_eq!(calc.buffer(), "π*2");

    let calc = type_line(calc, "{bs}{bs}{enter}{hold}");
    assert_eq!(calc.buffer(), "3.1415926536");
    assert_eq!(calc.history().len(), 3);
}

#[test]
fn keyboard_comma_and_mnemonics() {
    let commands: Vec<Command> = "l1000)"
        .chars()
        .filter_map(|c| command_for_key(Key::Char(c)))
        .collect();
    let calc = commands
        .iter()
        .fold(Calculator::new(), |calc, command| calc.apply(command))
        .evaluate();
    assert_eq!(calc.buffer(), "3");

    let calc = type_line(Calculator::new(), "1,5*2");
    assert_eq!(calc.buffer(), "3");
}

#[test]
fn syntax_errors_are_recoverable() {
    let calc = evaluated("2*(3");
    assert_eq!(calc.phase(), Phase::Errored);

    let calc = calc.append(")").evaluate();
    assert_eq!(calc.phase(), Phase::Resulted);
    assert_eq!(calc.buffer(), "6");
}

#[test]
fn negative_base_needs_parentheses_before_exponent() {
    let calc = press(
        Calculator::new(),
        &[
            KeypadButton::op("-"),
            KeypadButton::value("2"),
            KeypadButton::function("pow"),
            KeypadButton::value("2"),
            KeypadButton::action("equals"),
        ],
    );
    assert_eq!(calc.phase(), Phase::Errored);
    assert_eq!(calc.render().result, "Error");
    assert_eq!(calc.buffer(), "-2^2");

    let calc = type_line(Calculator::new(), "(-2)^2");
    assert_eq!(calc.buffer(), "4");
}

#[test]
fn history_is_bounded_and_newest_first() {
    let calc = (1..=16).fold(Calculator::new(), |calc, i| {
        calc.reset_all().append(&format!("{i}+0")).evaluate()
    });

    let history = calc.history().entries();
    assert_eq!(history.len(), 15);
    assert_eq!(history[0], HistoryEntry::new("16+0", "16"));
    assert_eq!(history[14], HistoryEntry::new("2+0", "2"));
}

#[test]
fn builder_capacity_bounds_history() {
    let calc = CalculatorBuilder::new().history_capacity(3).build().unwrap();
    let calc = (0..5).fold(calc, |calc, i| {
        calc.reset_all().append(&i.to_string()).evaluate()
    });
    assert_eq!(calc.history().len(), 3);
    assert_eq!(calc.history().entries()[0].result(), "4");
}
