use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use crate::value::Value;

// ===== Severities =====
/// Print category of a console operation; decides the output stream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// `assert`
    Assert,
    /// `count`
    Count,
    /// `countReset`
    CountReset,
    /// `debug`
    Debug,
    /// `dir`
    Dir,
    /// `dirxml`
    Dirxml,
    /// `error`
    Error,
    /// `group`
    Group,
    /// `groupCollapsed`
    GroupCollapsed,
    /// `info`
    Info,
    /// `log`
    Log,
    /// `table`
    Table,
    /// `timeEnd`
    TimeEnd,
    /// `timeLog`
    TimeLog,
    /// `trace`
    Trace,
    /// `warn`
    Warn,
}

impl Severity {
    /// Name of the severity as used by the console API.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Assert => "assert",
            Self::Count => "count",
            Self::CountReset => "countReset",
            Self::Debug => "debug",
            Self::Dir => "dir",
            Self::Dirxml => "dirxml",
            Self::Error => "error",
            Self::Group => "group",
            Self::GroupCollapsed => "groupCollapsed",
            Self::Info => "info",
            Self::Log => "log",
            Self::Table => "table",
            Self::TimeEnd => "timeEnd",
            Self::TimeLog => "timeLog",
            Self::Trace => "trace",
            Self::Warn => "warn",
        }
    }

    /// Stream the severity is routed to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Assert | Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// Logical output stream.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Stream {
    /// Standard output
    Stdout,
    /// Error output
    Stderr,
}

// ===== Targets =====
/// Writer shared between a console and whoever else holds it.
pub type SharedWriter = Arc<StdMutex<Box<dyn Write + Send>>>;

/// Where a logical stream ends up.
#[derive(Clone)]
pub enum Target {
    /// Process stdout
    Stdout,
    /// Process stderr
    Stderr,
    /// Custom writer
    Writer(SharedWriter),
}

impl Target {
    /// Wrap a custom writer.
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        Self::Writer(Arc::new(StdMutex::new(Box::new(w))))
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Self::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(bytes)?;
                err.flush()
            }
            Self::Writer(w) => {
                let mut w = w.lock().unwrap_or_else(PoisonError::into_inner);
                w.write_all(bytes)?;
                w.flush()
            }
        }
    }

    /// Whether the target is an interactive terminal. Custom writers never are.
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
            Self::Writer(_) => false,
        }
    }
}

impl core::fmt::Debug for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

// ===== Printer =====
pub const DEFAULT_INDENT: usize = 2;
/// Widest accepted indentation unit, in spaces.
pub const MAX_INDENT: usize = 16;

#[derive(Debug)]
pub struct Printer {
    pub out: Target,
    pub err: Target,
    pub indent: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            out: Target::Stdout,
            err: Target::Stderr,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Printer {
    /// Join `values` with spaces and indent every line by `depth` units.
    pub fn render(&self, values: &[Value], depth: usize) -> String {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let pad = " ".repeat(self.indent.min(MAX_INDENT).saturating_mul(depth));
        let mut buf = String::with_capacity(joined.len() + pad.len() + 1);
        for (i, line) in joined.split('\n').enumerate() {
            if i > 0 {
                buf.push('\n');
            }
            buf.push_str(&pad);
            buf.push_str(line);
        }
        buf.push('\n');
        buf
    }

    /// Write one rendered entry to the stream chosen by `severity`.
    ///
    /// `options` is a host hint and does not influence the output.
    pub fn print(
        &self,
        severity: Severity,
        values: &[Value],
        depth: usize,
        options: Option<&Value>,
    ) -> io::Result<()> {
        let _ = options;
        let line = self.render(values, depth);
        self.target(severity.stream()).write_all(line.as_bytes())
    }

    /// Write raw bytes to stdout (screen control sequences).
    pub fn write_raw(&self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    pub const fn target(&self, s: Stream) -> &Target {
        match s {
            Stream::Stdout => &self.out,
            Stream::Stderr => &self.err,
        }
    }
}
