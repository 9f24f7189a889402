//! Property-based tests for the command interpreter

use folio::terminal::commands::{not_found_message, CommandTable, RESET_NOTICE};
use folio::terminal::interpreter::normalize;
use folio::terminal::{Effect, Interpreter, Transcript};
use proptest::prelude::*;

fn regular_command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["help", "about", "skills", "meme", "quote"])
}

fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn test_interpret_doesnt_panic(s in "\\PC*") {
        let mut transcript = Transcript::new();
        let _ = Interpreter::default().interpret(&s, &mut transcript);
        prop_assert!(!transcript.is_empty());
    }

    #[test]
    fn test_regular_commands_any_casing(
        name in regular_command(),
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in "[ \t]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let input = format!("{}{}{}", left, recase(name, &mask), right);
        let table = CommandTable::builtin();
        let mut transcript = Transcript::new();

        let outcome = Interpreter::default().interpret(&input, &mut transcript);

        prop_assert_eq!(outcome.effect, Effect::None);
        prop_assert_eq!(transcript.len(), 2);
        prop_assert_eq!(transcript.last(), table.get(name));
    }

    #[test]
    fn test_unknown_commands_fall_back(word in "[a-z]{1,12}( [a-z0-9-]{1,8})?") {
        let table = CommandTable::builtin();
        prop_assume!(!table.contains(&word));

        let mut transcript = Transcript::new();
        let outcome = Interpreter::default().interpret(&word.to_uppercase(), &mut transcript);

        prop_assert!(!outcome.recognized);
        let expected = not_found_message(&normalize(&word));
        prop_assert_eq!(transcript.last(), Some(expected.as_str()));
    }

    #[test]
    fn test_clear_always_leaves_one_line(history in prop::collection::vec("\\PC{0,20}", 0..20)) {
        let interpreter = Interpreter::default();
        let mut transcript = Transcript::new();
        for line in &history {
            interpreter.interpret(line, &mut transcript);
        }

        interpreter.interpret("clear", &mut transcript);
        prop_assert_eq!(transcript.lines(), &[RESET_NOTICE.to_string()][..]);
    }

    #[test]
    fn test_transcript_only_grows_without_clear(inputs in prop::collection::vec("[a-z]{0,6}", 1..20)) {
        let interpreter = Interpreter::default();
        let mut transcript = Transcript::new();
        let mut previous = 0;
        for input in inputs.iter().filter(|i| i.as_str() != "clear") {
            interpreter.interpret(input, &mut transcript);
            prop_assert!(transcript.len() == previous + 2);
            previous = transcript.len();
        }
    }
}
