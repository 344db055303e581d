use strcalc_core::{calculate, Outcome, Violation};

fn report(input: &str) -> String {
    calculate(input)
        .expect_err("input should be rejected")
        .to_string()
}

#[test]
fn empty_string_is_zero() {
    assert_eq!(calculate(""), Ok(0));
}

#[test]
fn single_and_many_numbers() {
    assert_eq!(calculate("1"), Ok(1));
    assert_eq!(calculate("0,5"), Ok(5));
    assert_eq!(calculate("1,2"), Ok(3));
    assert_eq!(calculate("1,2,3,4,5,6,7,8,9,10"), Ok(55));
}

#[test]
fn mixed_default_separators() {
    assert_eq!(calculate("1\n2,3"), Ok(6));
    assert_eq!(calculate("1\n2,3\n4,5"), Ok(15));
}

#[test]
fn custom_delimiters() {
    assert_eq!(calculate("//;\n1;3"), Ok(4));
    assert_eq!(calculate("//|\n1|2|3"), Ok(6));
    assert_eq!(calculate("//sep\n2sep5"), Ok(7));
    assert_eq!(calculate("//*\n3*4*5"), Ok(12));
    assert_eq!(calculate("//|\n5"), Ok(5));
}

#[test]
fn empty_custom_delimiter_behaves_like_no_header() {
    assert_eq!(calculate("//\n1,2\n3"), Ok(6));
    assert_eq!(report("//\n1,2,"), "Input cannot end with a separator");
}

#[test]
fn wrong_separator_under_custom_delimiter() {
    assert_eq!(report("//|\n1|2,3"), "'|' expected but ',' found at position 3.");
    assert_eq!(report("//;\n1;2\n3"), "';' expected but '\n' found at position 3.");
}

#[test]
fn wrong_separator_reported_for_every_occurrence() {
    let report = calculate("//;\n1,2;3\n4").unwrap_err();
    let positions: Vec<usize> = report
        .violations()
        .iter()
        .filter_map(|v| match v {
            Violation::UnexpectedSeparator { position, .. } => Some(*position),
            _ => None,
        })
        .collect();
    assert_eq!(positions, vec![1, 5]);
    assert_eq!(report.len(), 2);
}

#[test]
fn trailing_separators() {
    for input in ["1,", "1,2,", "1\n2\n", "5\n", "1\n2,3,", "//;\n1;2;"] {
        assert_eq!(report(input), "Input cannot end with a separator", "input {input:?}");
    }
}

#[test]
fn negatives_listed_in_encounter_order() {
    assert_eq!(report("-1"), "Negative number(s) not allowed: -1");
    assert_eq!(report("2,-4,-9"), "Negative number(s) not allowed: -4, -9");
    assert_eq!(report("1,-2\n-3,4"), "Negative number(s) not allowed: -2, -3");
    assert_eq!(report("//|\n-1|2|-3|-4"), "Negative number(s) not allowed: -1, -3, -4");
}

#[test]
fn wrong_separator_precedes_negatives() {
    assert_eq!(
        report("//|\n1|2,-3"),
        "'|' expected but ',' found at position 3.\nNegative number(s) not allowed: -3"
    );
}

#[test]
fn trailing_precedes_negatives() {
    assert_eq!(
        report("1,-2,"),
        "Input cannot end with a separator\nNegative number(s) not allowed: -2"
    );
}

#[test]
fn negatives_found_across_wrong_separators() {
    let report = report("//;\n-1,2;-3\n-4");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.first(), Some(&"';' expected but ',' found at position 2."));
    assert_eq!(lines.last(), Some(&"Negative number(s) not allowed: -1, -3, -4"));
}

#[test]
fn usage_and_negatives_without_trailing() {
    let report = calculate("//|\n1|-2,").unwrap_err();
    assert_eq!(
        report.violations(),
        &[
            Violation::UnexpectedSeparator {
                expected: "|".to_string(),
                found: ',',
                position: 4,
            },
            Violation::NegativeValues { values: vec![-2] },
        ]
    );
}

#[test]
fn all_collected_kinds_in_report_order() {
    assert_eq!(
        report("//;\n1,-2;"),
        "';' expected but ',' found at position 1.\n\
         Input cannot end with a separator\n\
         Negative number(s) not allowed: -2"
    );

    let report = calculate("//;\n1,-2;").unwrap_err();
    assert!(matches!(
        report.violations(),
        [
            Violation::UnexpectedSeparator { position: 1, .. },
            Violation::TrailingSeparator,
            Violation::NegativeValues { .. },
        ]
    ));
}

#[test]
fn malformed_header_is_terminal() {
    assert_eq!(
        report("//;1;-2"),
        "Invalid format: missing newline after delimiter definition"
    );
}

#[test]
fn unparsable_tokens_are_dropped() {
    assert_eq!(calculate("1,x,2"), Ok(3));
    assert_eq!(calculate("1,,2"), Ok(3));
    assert_eq!(calculate("1,99999999999999999999,2"), Ok(3));
    assert_eq!(calculate("1_000,2"), Ok(2));
}

#[test]
fn repeated_calls_are_identical() {
    for input in ["", "1,2", "//|\n1|2,-3", "//;1", "1,"] {
        assert_eq!(calculate(input), calculate(input));
        assert_eq!(Outcome::from_input(input), Outcome::from_input(input));
    }
}

#[test]
fn concurrent_calls_share_nothing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("{i},{i}");
                calculate(&input)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(2 * i as i64));
    }
}
