use consolekit::{format, values, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn substitutes_specifiers_in_order() {
    assert_eq!(format(values!["%d apples", "3"]), values!["3 apples"]);
    assert_eq!(format(values!["%s and %s", "a", "b"]), values!["a and b"]);
    assert_eq!(format(values!["%i/%f", 7, "2.50"]), values!["7/2.5"]);
}

#[test]
fn unparseable_numbers_become_nan() {
    assert_eq!(format(values!["%d", "x"]), values!["NaN"]);
    assert_eq!(format(values!["%f", true]), values!["NaN"]);
    assert_eq!(format(values!["%d", Value::Undefined]), values!["NaN"]);
}

#[test]
fn single_argument_is_untouched() {
    assert_eq!(format(values!["%d"]), values!["%d"]);
    assert_eq!(format(Vec::new()), Vec::<Value>::new());
}

#[test]
fn non_text_first_argument_is_untouched() {
    let args = values![5, "%s", "x"];
    assert_eq!(format(args.clone()), args);
    let args = values![json!({"a": "%s"}), "x"];
    assert_eq!(format(args.clone()), args);
}

#[test]
fn missing_argument_leaves_specifier() {
    assert_eq!(format(values!["%s=%d", "x"]), values!["x=%d"]);
}

#[test]
fn extra_arguments_are_appended() {
    assert_eq!(format(values!["%s!", "hi", 1, "tail"]), values!["hi!", 1, "tail"]);
    assert_eq!(format(values!["plain", 1, 2]), values!["plain", 1, 2]);
}

#[test]
fn styling_and_object_specifiers() {
    assert_eq!(format(values!["%cbold", "color: red"]), values!["bold"]);
    assert_eq!(format(values!["v=%o", "s"]), values![r#"v="s""#]);
    assert_eq!(format(values!["v=%O", json!({"k": [1, 2]})]), values![r#"v={"k":[1,2]}"#]);
}

#[test]
fn substituted_text_is_rescanned() {
    assert_eq!(format(values!["%s %d", "%d", "5"]), values!["5 %d"]);
}

#[test]
fn unknown_specifiers_are_skipped() {
    assert_eq!(format(values!["100% %x %s", "ok"]), values!["100% %x ok"]);
}
