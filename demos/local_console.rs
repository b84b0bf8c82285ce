use consolekit::{values, Console, ConsoleError, ConsoleSink, Target, Value};
use serde_json::json;

fn main() -> Result<(), ConsoleError> {
    let console = Console::builder()
        .indent_width(4)
        .stderr(Target::Stdout)
        .build()?;

    console.group(values!["request %d", 7])?;
    console.log(values!["%s -> %o", "payload", json!({"id": 7})])?;
    console.table(
        json!([{"name": "bolt", "qty": 12}, {"name": "nut", "qty": 3}]).into(),
        None,
    )?;
    console.dir(Value::structured(&[1, 2, 3])?, None)?;
    console.assert(Some(false), values!["qty must be positive"])?;
    console.group_end()?;

    if let Err(e) = console.group_end() {
        console.error(values![e.to_string()])?;
    }
    Ok(())
}
