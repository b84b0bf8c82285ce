use std::sync::{Arc, Mutex};

use consolekit::host::{Host, HostConsole};
use consolekit::{values, CallSite, ConsoleSink, Value};
use pretty_assertions::assert_eq;

type Calls = Arc<Mutex<Vec<(String, Vec<Value>)>>>;

#[derive(Clone, Default)]
struct Recorder(Calls);

impl Host for Recorder {
    fn invoke(&self, method: &str, args: Vec<Value>) -> consolekit::Result<()> {
        self.0.lock().unwrap().push((method.to_owned(), args));
        Ok(())
    }
}

fn recording() -> (HostConsole, Calls) {
    let r = Recorder::default();
    let calls = r.0.clone();
    (HostConsole::new(r), calls)
}

#[test]
fn forwards_arguments_verbatim() {
    let (h, calls) = recording();
    h.log(values!["%d apples", "3"]).unwrap();
    h.warn(Vec::new()).unwrap();
    h.group(values!["g"]).unwrap();
    h.group_end().unwrap();
    h.group_end().unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            ("log".to_owned(), values!["%d apples", "3"]),
            ("warn".to_owned(), Vec::new()),
            ("group".to_owned(), values!["g"]),
            ("groupEnd".to_owned(), Vec::new()),
            ("groupEnd".to_owned(), Vec::new()),
        ]
    );
}

#[test]
fn optional_arguments_only_when_present() {
    let (h, calls) = recording();
    h.count(None).unwrap();
    h.count_reset(Some("c")).unwrap();
    h.time(Some("t")).unwrap();
    h.time_log(None, Vec::new()).unwrap();
    h.time_log(None, values!["x"]).unwrap();
    h.time_end(None).unwrap();
    h.assert(None, Vec::new()).unwrap();
    h.assert(Some(false), values!["msg"]).unwrap();
    h.dir(Value::from(1), None).unwrap();
    h.dir(Value::from(1), Some(Value::from("opts"))).unwrap();
    h.table(Value::from("t"), Some(vec!["a".into()])).unwrap();

    let got: Vec<(String, Vec<Value>)> = calls.lock().unwrap().clone();
    assert_eq!(
        got,
        vec![
            ("count".to_owned(), Vec::new()),
            ("countReset".to_owned(), values!["c"]),
            ("time".to_owned(), values!["t"]),
            ("timeLog".to_owned(), Vec::new()),
            ("timeLog".to_owned(), values!["default", "x"]),
            ("timeEnd".to_owned(), Vec::new()),
            ("assert".to_owned(), Vec::new()),
            ("assert".to_owned(), values![false, "msg"]),
            ("dir".to_owned(), values![1]),
            ("dir".to_owned(), values![1, "opts"]),
            ("table".to_owned(), values!["t", serde_json::json!(["a"])]),
        ]
    );
}

#[test]
fn trace_and_clear_keep_no_state() {
    let (h, calls) = recording();
    h.trace(CallSite::caller(), values!["here"]).unwrap();
    h.clear().unwrap();
    h.dirxml(values![1, 2]).unwrap();
    h.group_collapsed(Vec::new()).unwrap();
    let names: Vec<String> = calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect();
    assert_eq!(names, vec!["trace", "clear", "dirxml", "groupCollapsed"]);
}
