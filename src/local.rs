use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use crate::error::{ConsoleError, Result};
use crate::format::format;
use crate::printer::{Printer, Severity, Target, DEFAULT_INDENT, MAX_INDENT};
use crate::sink::{CallSite, ConsoleSink};
use crate::state::{
    Clock, CountTable, Group, GroupStack, SystemClock, TimerTable, DEFAULT_LABEL,
};
use crate::table;
use crate::{HumanDuration, Value};

const ASSERTION_FAILED: &str = "Assertion failed";
const NO_COUNT: &str = "The given label does not have an associated count";
const CLEAR_SCREEN: &[u8] = b"\x1b[H\x1b[2J";

/// Whether `clear()` emits the screen-clear sequence.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
pub enum ClearMode {
    /// Only when stdout is an interactive terminal
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

/// Error returned when parsing an unknown [`ClearMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseClearModeError;

impl core::fmt::Display for ParseClearModeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("expected one of: auto, always, never")
    }
}

impl std::error::Error for ParseClearModeError {}

impl core::str::FromStr for ClearMode {
    type Err = ParseClearModeError;
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            Err(ParseClearModeError)
        }
    }
}

impl From<u8> for ClearMode {
    fn from(x: u8) -> Self {
        match x {
            1 => Self::Always,
            2 => Self::Never,
            _ => Self::Auto,
        }
    }
}

struct State {
    groups: GroupStack,
    counts: CountTable,
    timers: TimerTable,
    printer: Printer,
}

impl State {
    fn print(&self, sev: Severity, values: &[Value], options: Option<&Value>) -> Result<()> {
        self.printer
            .print(sev, values, self.groups.depth(), options)
            .map_err(ConsoleError::from)
    }

    /// Shape rule shared by the variadic operations.
    fn logger(&self, sev: Severity, data: Vec<Value>) -> Result<()> {
        match data.len() {
            0 => Ok(()),
            1 => self.print(sev, &data, None),
            _ => self.print(sev, &format(data), None),
        }
    }

    fn warn(&self, message: String) -> Result<()> {
        self.logger(Severity::Warn, vec![Value::Str(message)])
    }

    fn open_group(&mut self, sev: Severity, data: Vec<Value>) -> Result<()> {
        let label = if data.is_empty() {
            vec![Value::Str(String::new())]
        } else {
            format(data)
        };
        let group = Group { label };
        self.print(sev, &[Value::Str(group.to_string())], None)?;
        self.groups.push(group);
        Ok(())
    }
}

/// The console engine.
///
/// Owns the group stack, the count table and the timer table. Every
/// operation runs under one lock, which also covers the final write, so
/// concurrent callers never see torn counters or interleaved lines.
pub struct Console {
    clear_mode: AtomicU8,
    clock: Arc<dyn Clock>,
    state: StdMutex<State>,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            clear_mode: AtomicU8::new(ClearMode::Auto as u8),
            clock: Arc::new(SystemClock),
            state: StdMutex::new(State {
                groups: GroupStack::default(),
                counts: CountTable::default(),
                timers: TimerTable::default(),
                printer: Printer::default(),
            }),
        }
    }
}

impl Console {
    /// Console writing to stdout/stderr with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `ConsoleBuilder`
    #[inline]
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Console configured from `CONSOLE_INDENT` and `CONSOLE_CLEAR`.
    #[must_use]
    pub fn from_env() -> Self {
        let c = Self::default();
        c.init_from_env();
        c
    }

    /// Apply `CONSOLE_INDENT` (indent width in spaces, at most
    /// [`MAX_INDENT`](crate::MAX_INDENT)) and `CONSOLE_CLEAR` (`auto`, `always`,
    /// `never`). Unparseable or out-of-range values are ignored.
    pub fn init_from_env(&self) {
        if let Ok(s) = std::env::var("CONSOLE_INDENT") {
            match s.trim().parse() {
                Ok(n) if n <= MAX_INDENT => self.set_indent_width(n),
                _ => {}
            }
        }
        if let Ok(s) = std::env::var("CONSOLE_CLEAR") {
            self.set_clear_mode(s.trim().parse().unwrap_or(ClearMode::Auto));
        }
    }

    // configuration
    /// Set the width of one indentation unit, in spaces; capped at [`MAX_INDENT`](crate::MAX_INDENT)
    pub fn set_indent_width(&self, n: usize) {
        self.lock().printer.indent = n.min(MAX_INDENT);
    }
    #[inline]
    /// Set the clear mode
    pub fn set_clear_mode(&self, m: ClearMode) {
        self.clear_mode.store(m as u8, Ordering::Relaxed);
    }
    /// Set the standard output target
    pub fn set_stdout(&self, t: Target) {
        self.lock().printer.out = t;
    }
    /// Set the error output target
    pub fn set_stderr(&self, t: Target) {
        self.lock().printer.err = t;
    }

    // inspection
    /// Number of open groups
    pub fn group_depth(&self) -> usize {
        self.lock().groups.depth()
    }
    /// Current value of a counter, `None` if it was never counted
    pub fn count_of(&self, label: &str) -> Option<u64> {
        self.lock().counts.get(label)
    }
    /// Whether a timer with `label` is running
    pub fn has_timer(&self, label: &str) -> bool {
        self.lock().timers.contains(label)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn clears_screen(&self, out: &Target) -> bool {
        match ClearMode::from(self.clear_mode.load(Ordering::Relaxed)) {
            ClearMode::Always => true,
            ClearMode::Never => false,
            ClearMode::Auto => out.is_terminal(),
        }
    }
}

impl ConsoleSink for Console {
    fn assert(&self, condition: Option<bool>, mut data: Vec<Value>) -> Result<()> {
        if condition == Some(true) {
            return Ok(());
        }
        match data.first_mut() {
            None => data.push(Value::from(ASSERTION_FAILED)),
            Some(Value::Str(first)) => *first = format!("{ASSERTION_FAILED}: {first}"),
            Some(_) => data.insert(0, Value::from(ASSERTION_FAILED)),
        }
        self.lock().logger(Severity::Assert, data)
    }

    fn clear(&self) -> Result<()> {
        let mut st = self.lock();
        st.groups.clear();
        if self.clears_screen(&st.printer.out) {
            st.printer.write_raw(CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn debug(&self, data: Vec<Value>) -> Result<()> {
        self.lock().logger(Severity::Debug, data)
    }

    fn error(&self, data: Vec<Value>) -> Result<()> {
        self.lock().logger(Severity::Error, data)
    }

    fn info(&self, data: Vec<Value>) -> Result<()> {
        self.lock().logger(Severity::Info, data)
    }

    fn log(&self, data: Vec<Value>) -> Result<()> {
        self.lock().logger(Severity::Log, data)
    }

    fn warn(&self, data: Vec<Value>) -> Result<()> {
        self.lock().logger(Severity::Warn, data)
    }

    fn table(&self, tabular_data: Value, properties: Option<Vec<String>>) -> Result<()> {
        let rendered = match &tabular_data {
            Value::Structured(json) => table::render(json, properties.as_deref()),
            _ => None,
        };
        let st = self.lock();
        match rendered {
            Some(text) => st.print(Severity::Table, &[Value::Str(text)], None),
            None => st.logger(Severity::Log, vec![tabular_data]),
        }
    }

    fn trace(&self, site: CallSite, data: Vec<Value>) -> Result<()> {
        let text = if data.is_empty() {
            site.to_string()
        } else {
            let label = Group {
                label: format(data),
            };
            format!("{label}\n  at {site}")
        };
        self.lock().print(Severity::Trace, &[Value::Str(text)], None)
    }

    fn dir(&self, item: Value, options: Option<Value>) -> Result<()> {
        let object = Value::Str(item.inspect());
        self.lock()
            .print(Severity::Dir, &[object], options.as_ref())
    }

    fn dirxml(&self, data: Vec<Value>) -> Result<()> {
        let converted = data
            .iter()
            .map(|item| Value::Str(item.inspect_pretty()))
            .collect();
        self.lock().logger(Severity::Dirxml, converted)
    }

    fn count(&self, label: Option<&str>) -> Result<()> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let mut st = self.lock();
        let n = st.counts.increment(label);
        st.print(Severity::Count, &[Value::Str(format!("{label}: {n}"))], None)
    }

    fn count_reset(&self, label: Option<&str>) -> Result<()> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let mut st = self.lock();
        if st.counts.reset(label) {
            return Ok(());
        }
        st.logger(Severity::CountReset, vec![Value::from(NO_COUNT)])
    }

    fn group(&self, data: Vec<Value>) -> Result<()> {
        self.lock().open_group(Severity::Group, data)
    }

    fn group_collapsed(&self, data: Vec<Value>) -> Result<()> {
        self.lock().open_group(Severity::GroupCollapsed, data)
    }

    fn group_end(&self) -> Result<()> {
        self.lock()
            .groups
            .pop()
            .map(drop)
            .ok_or(ConsoleError::InvalidState("group_end called with no open group"))
    }

    fn time(&self, label: Option<&str>) -> Result<()> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let mut st = self.lock();
        if st.timers.start(label, self.clock.now()) {
            return Ok(());
        }
        st.warn(format!("A timer with label {label} has already been started"))
    }

    fn time_log(&self, label: Option<&str>, data: Vec<Value>) -> Result<()> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let st = self.lock();
        let Some(elapsed) = st.timers.elapsed(label, self.clock.now()) else {
            return st.warn(format!("A timer with label {label} has not been started"));
        };
        let mut values = Vec::with_capacity(data.len() + 1);
        values.push(Value::Str(format!("{label}: {}", HumanDuration(elapsed))));
        values.extend(data);
        st.print(Severity::TimeLog, &values, None)
    }

    fn time_end(&self, label: Option<&str>) -> Result<()> {
        let label = label.unwrap_or(DEFAULT_LABEL);
        let mut st = self.lock();
        let Some(elapsed) = st.timers.end(label, self.clock.now()) else {
            return st.warn(format!("A timer with label {label} has not been started"));
        };
        let concat = format!("{label}: {}", HumanDuration(elapsed));
        st.print(Severity::TimeEnd, &[Value::Str(concat)], None)
    }
}

/// Scope timer: starts a console timer on creation and ends it on drop.
///
/// Output errors at drop time are discarded.
pub struct TimerGuard<'a> {
    sink: &'a dyn ConsoleSink,
    label: String,
}

impl<'a> TimerGuard<'a> {
    /// Start the timer `label` on `sink`
    #[must_use]
    pub fn new(sink: &'a dyn ConsoleSink, label: impl Into<String>) -> Self {
        let label = label.into();
        let _ = sink.time(Some(&label));
        Self { sink, label }
    }
}

impl Drop for TimerGuard<'_> {
    fn drop(&mut self) {
        let _ = self.sink.time_end(Some(&self.label));
    }
}

/// Builder for `Console`
pub struct ConsoleBuilder {
    indent_width: usize,
    clear_mode: ClearMode,
    stdout: Target,
    stderr: Target,
    clock: Option<Arc<dyn Clock>>,
    file_path: Option<PathBuf>,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT,
            clear_mode: ClearMode::Auto,
            stdout: Target::Stdout,
            stderr: Target::Stderr,
            clock: None,
            file_path: None,
        }
    }
}

impl ConsoleBuilder {
    #[inline]
    #[must_use]
    /// Width of one indentation unit, in spaces; capped at [`MAX_INDENT`](crate::MAX_INDENT)
    pub const fn indent_width(mut self, n: usize) -> Self {
        self.indent_width = if n > MAX_INDENT { MAX_INDENT } else { n };
        self
    }
    #[inline]
    #[must_use]
    /// Set the clear mode
    pub const fn clear_mode(mut self, m: ClearMode) -> Self {
        self.clear_mode = m;
        self
    }
    #[inline]
    #[must_use]
    /// Target for the standard output stream
    pub fn stdout(mut self, t: Target) -> Self {
        self.stdout = t;
        self
    }
    #[inline]
    #[must_use]
    /// Target for the error stream
    pub fn stderr(mut self, t: Target) -> Self {
        self.stderr = t;
        self
    }
    #[inline]
    #[must_use]
    /// Send both streams to one custom writer
    pub fn writer(mut self, w: impl std::io::Write + Send + 'static) -> Self {
        let t = Target::writer(w);
        self.stdout = t.clone();
        self.stderr = t;
        self
    }
    #[inline]
    #[must_use]
    /// Append both streams to a file
    pub fn file(mut self, p: impl AsRef<std::path::Path>) -> Self {
        self.file_path = Some(p.as_ref().to_owned());
        self
    }
    #[inline]
    #[must_use]
    /// Clock used by the timer table
    pub fn clock(mut self, c: Arc<dyn Clock>) -> Self {
        self.clock = Some(c);
        self
    }

    /// Build the console
    /// # Errors
    /// This function will return an error if the file cannot be opened for writing
    pub fn build(self) -> Result<Console> {
        let (out, err) = match self.file_path {
            Some(p) => {
                let f = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(p)?;
                let t = Target::writer(f);
                (t.clone(), t)
            }
            None => (self.stdout, self.stderr),
        };
        let c = Console {
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            ..Console::default()
        };
        {
            let mut st = c.lock();
            st.printer = Printer {
                out,
                err,
                indent: self.indent_width,
            };
        }
        c.set_clear_mode(self.clear_mode);
        Ok(c)
    }

    /// Build the console and leak it
    /// # Errors
    /// This function will return an error if the file cannot be opened for writing
    pub fn build_static(self) -> Result<&'static Console> {
        Ok(Box::leak(Box::new(self.build()?)))
    }
}
