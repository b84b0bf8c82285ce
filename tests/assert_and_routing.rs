mod helpers;
use helpers::*;

use consolekit::{values, ConsoleSink, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn failed_assert_prefixes_message() {
    let c = capture();
    c.console.assert(Some(false), values!["bad state"]).unwrap();
    c.console.assert(Some(false), Vec::new()).unwrap();
    c.console.assert(None, Vec::new()).unwrap();
    assert_eq!(
        c.err_lines(),
        vec!["Assertion failed: bad state", "Assertion failed", "Assertion failed"]
    );
    assert_eq!(c.out_text(), "");
}

#[test]
fn passing_assert_prints_nothing() {
    let c = capture();
    c.console.assert(Some(true), values!["never shown"]).unwrap();
    assert_eq!(c.err_text(), "");
}

#[test]
fn assert_formats_after_prefixing() {
    let c = capture();
    c.console.assert(Some(false), values!["x is %d", 3, "!"]).unwrap();
    c.console.assert(Some(false), values![42, "tail"]).unwrap();
    assert_eq!(
        c.err_lines(),
        vec!["Assertion failed: x is 3 !", "Assertion failed 42 tail"]
    );
}

#[test]
fn severities_pick_streams() {
    let c = capture();
    c.console.log(values!["log"]).unwrap();
    c.console.info(values!["info"]).unwrap();
    c.console.debug(values!["debug"]).unwrap();
    c.console.dirxml(values!["dirxml"]).unwrap();
    c.console.warn(values!["warn"]).unwrap();
    c.console.error(values!["error"]).unwrap();

    assert_eq!(c.out_lines(), vec!["log", "info", "debug", r#""dirxml""#]);
    assert_eq!(c.err_lines(), vec!["warn", "error"]);
}

#[test]
fn empty_calls_are_noops() {
    let c = capture();
    c.console.log(Vec::new()).unwrap();
    c.console.error(Vec::new()).unwrap();
    c.console.dirxml(Vec::new()).unwrap();
    assert_eq!(c.out_text(), "");
    assert_eq!(c.err_text(), "");
}

#[test]
fn single_argument_skips_formatting() {
    let c = capture();
    c.console.log(values!["100%d"]).unwrap();
    c.console.log(values!["%s is %d", "n"]).unwrap();
    assert_eq!(c.out_lines(), vec!["100%d", "n is %d"]);
}

#[test]
fn wide_integers_print_exact_digits() {
    let c = capture();
    c.console
        .log(vec![Value::from(u64::MAX), Value::from(i128::MIN), Value::from(7_usize)])
        .unwrap();
    c.console.log(values!["%s", u128::MAX]).unwrap();
    assert_eq!(
        c.out_lines(),
        vec![
            "18446744073709551615 -170141183460469231731687303715884105728 7".to_owned(),
            u128::MAX.to_string(),
        ]
    );
}

#[test]
fn values_are_joined_with_spaces() {
    let c = capture();
    c.console
        .log(vec![
            Value::Null,
            Value::Undefined,
            Value::from(1.5),
            Value::from(json!({"a": [1]})),
            Value::opaque(&Some(3)),
        ])
        .unwrap();
    assert_eq!(c.out_text(), "null undefined 1.5 {\"a\":[1]} Some(3)\n");
}
