#![warn(missing_docs, unsafe_code)]
//! A console API (`log`, `warn`, `group`, `count`, `time`, ...) for programs
//! that have no native console host.
//!
//! Calls are variadic: the first argument may be a template containing
//! `%s`, `%d`, `%i`, `%f`, `%o`, `%O` or `%c`, filled from the following
//! arguments. Output is indented by the number of open groups and routed to
//! stderr for `assert`, `error` and `warn`, stdout otherwise.
//!
//! ```no_run
//! use consolekit::{group, log, warn};
//!
//! group!("request %d", 7)?;
//! log!("%s took %dms", "parse", 12)?;
//! warn!("retrying")?;
//! consolekit::group_end()?;
//! # Ok::<(), consolekit::ConsoleError>(())
//! ```
//!
//! The free functions and macros use one process-wide console. Use
//! [`Console`] directly for independent instances (for example in tests).
//! With the `host` feature the free functions forward to an installed
//! [`host::Host`] instead.

mod duration;
mod error;
mod format;
pub mod host;
pub mod local;
mod printer;
mod sink;
mod state;
mod table;
mod value;

pub use duration::HumanDuration;
pub use error::{ConsoleError, Result};
pub use format::format;
pub use local::{ClearMode, Console, ConsoleBuilder, ParseClearModeError, TimerGuard};
pub use printer::{Severity, SharedWriter, Stream, Target, MAX_INDENT};
pub use sink::{CallSite, ConsoleSink};
pub use state::{Clock, Group, SystemClock, DEFAULT_LABEL};
pub use value::Value;

#[cfg(not(feature = "host"))]
mod imp {
    use std::sync::OnceLock;

    use crate::{Console, ConsoleSink};

    static CONSOLE: OnceLock<Console> = OnceLock::new();

    /// Installs the process-wide console.
    /// # Errors
    /// Gives `c` back if a console is already installed, including the
    /// default one created by the first free-function call.
    pub fn set_console(c: Console) -> Result<(), Console> {
        CONSOLE.set(c)
    }

    /// The process-wide console, configured from the environment on first use.
    pub fn console() -> &'static Console {
        CONSOLE.get_or_init(Console::from_env)
    }

    /// The sink behind the free functions.
    pub fn global() -> &'static dyn ConsoleSink {
        console()
    }

    /// Re-read `CONSOLE_INDENT` and `CONSOLE_CLEAR` into the process-wide console.
    pub fn init_from_env() {
        console().init_from_env();
    }
}

#[cfg(feature = "host")]
mod imp {
    //! Host build: the free functions forward to the installed host and
    //! drop calls until one is installed.

    use std::sync::OnceLock;

    use crate::host::{Host, HostConsole, NoHost};
    use crate::ConsoleSink;

    static HOST: OnceLock<HostConsole> = OnceLock::new();

    /// Installs the host console once. Subsequent calls are ignored.
    pub fn install_host(h: impl Host + 'static) {
        let _ = HOST.set(HostConsole::new(h));
    }

    /// The sink behind the free functions.
    pub fn global() -> &'static dyn ConsoleSink {
        HOST.get_or_init(|| HostConsole::new(NoHost))
    }
}

#[cfg(not(feature = "host"))]
pub use imp::{console, init_from_env, set_console};
#[cfg(feature = "host")]
pub use imp::install_host;
pub use imp::global;

// ===== Free functions =====
/// `console.assert`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn assert(condition: Option<bool>, data: Vec<Value>) -> Result<()> {
    global().assert(condition, data)
}
/// `console.clear`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn clear() -> Result<()> {
    global().clear()
}
/// `console.debug`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn debug(data: Vec<Value>) -> Result<()> {
    global().debug(data)
}
/// `console.error`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn error(data: Vec<Value>) -> Result<()> {
    global().error(data)
}
/// `console.info`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn info(data: Vec<Value>) -> Result<()> {
    global().info(data)
}
/// `console.log`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn log(data: Vec<Value>) -> Result<()> {
    global().log(data)
}
/// `console.warn`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn warn(data: Vec<Value>) -> Result<()> {
    global().warn(data)
}
/// `console.table`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn table(tabular_data: Value, properties: Option<Vec<String>>) -> Result<()> {
    global().table(tabular_data, properties)
}
/// `console.trace`, reporting the `file:line:column` of the caller.
///
/// A function has no stable way to learn its caller's name; use the
/// [`trace!`] macro to also record the calling module.
/// # Errors
/// Fails if the output stream cannot be written.
#[track_caller]
pub fn trace(data: Vec<Value>) -> Result<()> {
    global().trace(CallSite::caller(), data)
}
/// `console.dir`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn dir(item: Value, options: Option<Value>) -> Result<()> {
    global().dir(item, options)
}
/// `console.dirxml`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn dirxml(data: Vec<Value>) -> Result<()> {
    global().dirxml(data)
}
/// `console.count`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn count(label: Option<&str>) -> Result<()> {
    global().count(label)
}
/// `console.countReset`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn count_reset(label: Option<&str>) -> Result<()> {
    global().count_reset(label)
}
/// `console.group`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn group(data: Vec<Value>) -> Result<()> {
    global().group(data)
}
/// `console.groupCollapsed`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn group_collapsed(data: Vec<Value>) -> Result<()> {
    global().group_collapsed(data)
}
/// `console.groupEnd`
/// # Errors
/// Fails with [`ConsoleError::InvalidState`] when no group is open.
pub fn group_end() -> Result<()> {
    global().group_end()
}
/// `console.time`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn time(label: Option<&str>) -> Result<()> {
    global().time(label)
}
/// `console.timeLog`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn time_log(label: Option<&str>, data: Vec<Value>) -> Result<()> {
    global().time_log(label, data)
}
/// `console.timeEnd`
/// # Errors
/// Fails if the output stream cannot be written.
pub fn time_end(label: Option<&str>) -> Result<()> {
    global().time_end(label)
}

// ===== Macros =====
/// Build a `Vec<Value>` from heterogeneous expressions
#[macro_export]
macro_rules! values { ($($v:expr),* $(,)?) => { ::std::vec![$($crate::Value::from($v)),*] } }
/// log
#[macro_export]
macro_rules! log { ($($v:expr),* $(,)?) => { $crate::log($crate::values![$($v),*]) } }
/// debug
#[macro_export]
macro_rules! debug { ($($v:expr),* $(,)?) => { $crate::debug($crate::values![$($v),*]) } }
/// info
#[macro_export]
macro_rules! info  { ($($v:expr),* $(,)?) => { $crate::info($crate::values![$($v),*]) } }
/// warning
#[macro_export]
macro_rules! warn  { ($($v:expr),* $(,)?) => { $crate::warn($crate::values![$($v),*]) } }
/// error
#[macro_export]
macro_rules! error { ($($v:expr),* $(,)?) => { $crate::error($crate::values![$($v),*]) } }
/// group
#[macro_export]
macro_rules! group { ($($v:expr),* $(,)?) => { $crate::group($crate::values![$($v),*]) } }
/// trace, recording the calling module
#[macro_export]
macro_rules! trace {
    ($($v:expr),* $(,)?) => {
        $crate::ConsoleSink::trace(
            $crate::global(),
            $crate::CallSite::new(module_path!(), file!(), line!(), column!()),
            $crate::values![$($v),*],
        )
    };
}
/// Time a block, or the rest of the enclosing scope
#[macro_export]
macro_rules! scope_time {
    ($label:expr) => {
        let _consolekit_scope_time_guard = $crate::TimerGuard::new($crate::global(), $label);
    };
    ($label:expr, $body:block) => {{
        let _consolekit_scope_time_guard = $crate::TimerGuard::new($crate::global(), $label);
        $body
    }};
}
