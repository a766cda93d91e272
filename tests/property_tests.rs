//! Property-based tests for the calculator state machine and evaluator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use keycalc::core::Phase;
use keycalc::eval::{evaluate, format_number, normalize, Outcome};
use keycalc::machine::{Calculator, Command};
use proptest::prelude::*;

prop_compose! {
    fn single_char_token()(index in 0..22usize) -> String {
        let alphabet = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "-", "*", "/", "(", ")", ".",
            "^", "π", "e", "√", " ",
        ];
        alphabet[index].to_string()
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => single_char_token().prop_map(Command::Append),
        1 => prop::sample::select(vec!["sin", "cos", "tan", "log", "ln"])
            .prop_map(Command::wrap),
        1 => Just(Command::DeleteLast),
        1 => Just(Command::ResetAll),
        2 => Just(Command::Evaluate),
    ]
}

fn run(commands: &[Command]) -> Calculator {
    commands
        .iter()
        .fold(Calculator::new(), |calc, command| calc.apply(command))
}

proptest! {
    #[test]
    fn append_then_delete_restores_buffer(
        commands in prop::collection::vec(arbitrary_command(), 0..20),
        token in single_char_token(),
    ) {
        let before = run(&commands);
        let after = before.append(&token).delete_last();
        prop_assert_eq!(after.buffer(), before.buffer());
        prop_assert_eq!(after.phase(), Phase::Editing);
    }

    #[test]
    fn reset_always_yields_empty_editing(
        commands in prop::collection::vec(arbitrary_command(), 0..30)
    ) {
        let calc = run(&commands).reset_all();
        prop_assert_eq!(calc.buffer(), "");
        prop_assert_eq!(calc.phase(), Phase::Editing);
        prop_assert!(calc.display().is_none());
        prop_assert_eq!(calc.render().result, "0");
    }

    #[test]
    fn history_never_exceeds_capacity(
        commands in prop::collection::vec(arbitrary_command(), 0..80)
    ) {
        let calc = run(&commands);
        prop_assert!(calc.history().len() <= 15);
    }

    #[test]
    fn editing_commands_always_clear_result(
        commands in prop::collection::vec(arbitrary_command(), 0..20),
        token in single_char_token(),
    ) {
        let calc = run(&commands);
        prop_assert_eq!(calc.append(&token).phase(), Phase::Editing);
        prop_assert_eq!(calc.wrap_function("sin").phase(), Phase::Editing);
        prop_assert_eq!(calc.delete_last().phase(), Phase::Editing);
    }

    #[test]
    fn evaluate_on_empty_buffer_is_noop(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let calc = run(&commands).reset_all();
        prop_assert_eq!(calc.evaluate(), calc);
    }

    #[test]
    fn whitespace_only_buffer_is_an_error(spaces in " {1,8}") {
        let calc = Calculator::new().append(&spaces).evaluate();
        prop_assert_eq!(calc.phase(), Phase::Errored);
        prop_assert_eq!(calc.buffer(), spaces.as_str());
        prop_assert!(calc.history().is_empty());
    }

    #[test]
    fn failed_evaluation_keeps_buffer_and_history(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let calc = run(&commands);
        let evaluated = calc.evaluate();
        if evaluated.phase() == Phase::Errored {
            prop_assert_eq!(evaluated.buffer(), calc.buffer());
            prop_assert_eq!(evaluated.history(), calc.history());
        }
    }

    #[test]
    fn evaluate_never_panics(input in ".{0,40}") {
        let _ = evaluate(&input);
    }

    #[test]
    fn plain_arithmetic_is_not_rewritten(input in "[0-9+*/().-]{0,30}") {
        prop_assert_eq!(normalize(&input), input);
    }

    #[test]
    fn normalize_is_deterministic(input in ".{0,30}") {
        prop_assert_eq!(normalize(&input), normalize(&input));
    }

    #[test]
    fn quotients_keep_at_most_ten_decimals(a in 0u32..100_000, b in 1u32..10_000) {
        let result = evaluate(&format!("{}/{}", a, b));
        match result {
            Ok(Outcome::Finite(value)) => {
                let text = format_number(value);
                let decimals = text.split('.').nth(1).map_or(0, str::len);
                prop_assert!(decimals <= 10, "{} has too many decimals", text);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }
}
