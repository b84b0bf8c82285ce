//! Pass-through to a native console.
//!
//! When the embedding environment already has a console, [`HostConsole`]
//! forwards every operation by name with its arguments untouched. No
//! specifier substitution, indentation, counters or timers happen here.

use crate::error::Result;
use crate::sink::{CallSite, ConsoleSink};
use crate::state::DEFAULT_LABEL;
use crate::Value;

/// A native console able to run an operation by its API name
/// (`"log"`, `"countReset"`, `"groupEnd"`, ...).
pub trait Host: Send + Sync {
    /// Run `method` with `args` on the host console.
    /// # Errors
    /// Whatever the host reports.
    fn invoke(&self, method: &str, args: Vec<Value>) -> Result<()>;
}

/// Host that drops every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHost;

impl Host for NoHost {
    fn invoke(&self, _: &str, _: Vec<Value>) -> Result<()> {
        Ok(())
    }
}

/// [`ConsoleSink`] forwarding to a [`Host`].
pub struct HostConsole {
    host: Box<dyn Host>,
}

impl HostConsole {
    /// Wrap `host`.
    pub fn new(host: impl Host + 'static) -> Self {
        Self {
            host: Box::new(host),
        }
    }

    /// Wrap an already boxed host.
    #[must_use]
    pub fn from_boxed(host: Box<dyn Host>) -> Self {
        Self { host }
    }

    fn call(&self, method: &str, args: Vec<Value>) -> Result<()> {
        self.host.invoke(method, args)
    }

    fn call_label(&self, method: &str, label: Option<&str>) -> Result<()> {
        self.call(method, label.map(Value::from).into_iter().collect())
    }
}

impl ConsoleSink for HostConsole {
    fn assert(&self, condition: Option<bool>, data: Vec<Value>) -> Result<()> {
        let mut args = Vec::with_capacity(data.len() + 1);
        if condition.is_some() || !data.is_empty() {
            args.push(Value::Bool(condition.unwrap_or(false)));
        }
        args.extend(data);
        self.call("assert", args)
    }

    fn clear(&self) -> Result<()> {
        self.call("clear", Vec::new())
    }

    fn debug(&self, data: Vec<Value>) -> Result<()> {
        self.call("debug", data)
    }

    fn error(&self, data: Vec<Value>) -> Result<()> {
        self.call("error", data)
    }

    fn info(&self, data: Vec<Value>) -> Result<()> {
        self.call("info", data)
    }

    fn log(&self, data: Vec<Value>) -> Result<()> {
        self.call("log", data)
    }

    fn warn(&self, data: Vec<Value>) -> Result<()> {
        self.call("warn", data)
    }

    fn table(&self, tabular_data: Value, properties: Option<Vec<String>>) -> Result<()> {
        let mut args = vec![tabular_data];
        if let Some(props) = properties {
            args.push(Value::Structured(props.into()));
        }
        self.call("table", args)
    }

    fn trace(&self, _site: CallSite, data: Vec<Value>) -> Result<()> {
        self.call("trace", data)
    }

    fn dir(&self, item: Value, options: Option<Value>) -> Result<()> {
        let mut args = vec![item];
        args.extend(options);
        self.call("dir", args)
    }

    fn dirxml(&self, data: Vec<Value>) -> Result<()> {
        self.call("dirxml", data)
    }

    fn count(&self, label: Option<&str>) -> Result<()> {
        self.call_label("count", label)
    }

    fn count_reset(&self, label: Option<&str>) -> Result<()> {
        self.call_label("countReset", label)
    }

    fn group(&self, data: Vec<Value>) -> Result<()> {
        self.call("group", data)
    }

    fn group_collapsed(&self, data: Vec<Value>) -> Result<()> {
        self.call("groupCollapsed", data)
    }

    fn group_end(&self) -> Result<()> {
        self.call("groupEnd", Vec::new())
    }

    fn time(&self, label: Option<&str>) -> Result<()> {
        self.call_label("time", label)
    }

    fn time_log(&self, label: Option<&str>, data: Vec<Value>) -> Result<()> {
        let mut args = Vec::with_capacity(data.len() + 1);
        if label.is_some() || !data.is_empty() {
            args.push(Value::from(label.unwrap_or(DEFAULT_LABEL)));
        }
        args.extend(data);
        self.call("timeLog", args)
    }

    fn time_end(&self, label: Option<&str>) -> Result<()> {
        self.call_label("timeEnd", label)
    }
}
