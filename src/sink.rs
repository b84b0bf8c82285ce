use core::fmt;
use std::panic::Location;

use crate::error::Result;
use crate::value::Value;

/// Source location of a `trace` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Module path of the caller, when known
    pub module: Option<&'static str>,
    /// Source file
    pub file: &'static str,
    /// Line
    pub line: u32,
    /// Column
    pub column: u32,
}

impl CallSite {
    /// Location of the caller of the enclosing `#[track_caller]` function.
    ///
    /// `Location` carries no module or function name, so `module` is `None`;
    /// [`CallSite::new`] with `module_path!()` fills it.
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self {
            module: None,
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }

    /// Call site with a known module path; used by the `trace!` macro.
    #[inline]
    #[must_use]
    pub const fn new(module: &'static str, file: &'static str, line: u32, column: u32) -> Self {
        Self {
            module: Some(module),
            file,
            line,
            column,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.module {
            Some(m) => write!(f, "{m} ({}:{}:{})", self.file, self.line, self.column),
            None => write!(f, "{}:{}:{}", self.file, self.line, self.column),
        }
    }
}

/// The console operation set.
///
/// Implemented by the formatting engine ([`Console`](crate::Console)) and by the
/// pass-through adapter for environments that already have a console
/// ([`HostConsole`](crate::host::HostConsole)). Callers depend on this trait
/// only.
///
/// Optional arguments are `Option`s; an absent label means `"default"`.
pub trait ConsoleSink: Send + Sync {
    /// Log `data` at `assert` severity unless `condition` is `Some(true)`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn assert(&self, condition: Option<bool>, data: Vec<Value>) -> Result<()>;
    /// Close every open group and clear the screen when attached to a terminal.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn clear(&self) -> Result<()>;
    /// Log at `debug` severity.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn debug(&self, data: Vec<Value>) -> Result<()>;
    /// Log at `error` severity.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn error(&self, data: Vec<Value>) -> Result<()>;
    /// Log at `info` severity.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn info(&self, data: Vec<Value>) -> Result<()>;
    /// Log at `log` severity.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn log(&self, data: Vec<Value>) -> Result<()>;
    /// Log at `warn` severity.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn warn(&self, data: Vec<Value>) -> Result<()>;
    /// Render tabular data, optionally restricted to `properties`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn table(&self, tabular_data: Value, properties: Option<Vec<String>>) -> Result<()>;
    /// Print the call site, labelled with `data`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn trace(&self, site: CallSite, data: Vec<Value>) -> Result<()>;
    /// Print the structural form of `item`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn dir(&self, item: Value, options: Option<Value>) -> Result<()>;
    /// Print the richest available form of each element.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn dirxml(&self, data: Vec<Value>) -> Result<()>;
    /// Increment and print the counter for `label`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn count(&self, label: Option<&str>) -> Result<()>;
    /// Reset the counter for `label` to zero.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn count_reset(&self, label: Option<&str>) -> Result<()>;
    /// Print a group label and open a nesting level.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn group(&self, data: Vec<Value>) -> Result<()>;
    /// Same as [`group`](Self::group); collapsing is a presentation hint.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn group_collapsed(&self, data: Vec<Value>) -> Result<()>;
    /// Close the innermost group.
    /// # Errors
    /// Fails with [`ConsoleError::InvalidState`](crate::ConsoleError::InvalidState)
    /// when no group is open.
    fn group_end(&self) -> Result<()>;
    /// Start the timer for `label`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn time(&self, label: Option<&str>) -> Result<()>;
    /// Print the elapsed time of a running timer followed by `data`.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn time_log(&self, label: Option<&str>, data: Vec<Value>) -> Result<()>;
    /// Stop the timer for `label` and print its elapsed time.
    /// # Errors
    /// Fails if the output stream cannot be written.
    fn time_end(&self, label: Option<&str>) -> Result<()>;
}
