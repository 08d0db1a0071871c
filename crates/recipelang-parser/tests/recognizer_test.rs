use recipelang_common::{Action, Ingredient, Instruction, RecognizeError, TimeUnit, Vocabulary};
use recipelang_parser::recognize;

#[test]
fn test_every_mixing_combination_is_recognized() {
    for action in Action::ALL {
        for first in Ingredient::ALL {
            for second in Ingredient::ALL {
                let line = format!("{} {} and {}", action, first, second);
                let instruction = recognize(&line)
                    .unwrap_or_else(|e| panic!("{:?} rejected: {}", line, e))
                    .expect("command line must not be a no-op");
                assert_eq!(
                    instruction,
                    Instruction::Mixing {
                        action: *action,
                        first: *first,
                        second: *second,
                    }
                );
            }
        }
    }
}

#[test]
fn test_every_timed_combination_is_recognized() {
    let durations = ["0", "1", "45", "000", "18446744073709551616000"];
    for action in Action::ALL {
        for unit in TimeUnit::ALL {
            for digits in durations {
                let line = format!("{} for {} {}", action, digits, unit);
                match recognize(&line) {
                    Ok(Some(Instruction::Timed {
                        action: a,
                        duration,
                        unit: u,
                    })) => {
                        assert_eq!(a, *action);
                        assert_eq!(u, *unit);
                        assert_eq!(duration.as_str(), digits);
                    }
                    other => panic!("{:?} gave {:?}", line, other),
                }
            }
        }
    }
}

#[test]
fn test_unknown_action_names_all_alternatives() {
    match recognize("fry flour and eggs") {
        Err(RecognizeError::UnknownAction { token, valid }) => {
            assert_eq!(token, "fry");
            assert_eq!(valid, vec!["add", "bake", "cool", "heat", "mix"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_unknown_ingredient_names_chocolate() {
    match recognize("mix flour and chocolate") {
        Err(RecognizeError::UnknownIngredient { token, valid }) => {
            assert_eq!(token, "chocolate");
            assert_eq!(valid.len(), Ingredient::ALL.len());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_pattern_without_keyword() {
    assert_eq!(
        recognize("mix flour"),
        Err(RecognizeError::UnrecognizedPattern)
    );
    assert_eq!(
        recognize("bake 30 minutes"),
        Err(RecognizeError::UnrecognizedPattern)
    );
}

#[test]
fn test_unicode_digits_are_not_durations() {
    let err = recognize("bake for ٣٠ minutes").unwrap_err();
    assert!(matches!(err, RecognizeError::NonNumericDuration { .. }));
}
