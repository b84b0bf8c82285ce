#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use consolekit::{ClearMode, Clock, Console, Target};

#[derive(Clone, Default)]
pub struct Mem(pub Arc<Mutex<Vec<u8>>>);
impl Write for Mem {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console with separate in-memory stdout and stderr.
pub struct Captured {
    pub console: Console,
    pub out: Mem,
    pub err: Mem,
}

impl Captured {
    pub fn out_text(&self) -> String {
        text(&self.out)
    }
    pub fn err_text(&self) -> String {
        text(&self.err)
    }
    pub fn out_lines(&self) -> Vec<String> {
        lines(&self.out)
    }
    pub fn err_lines(&self) -> Vec<String> {
        lines(&self.err)
    }
}

pub fn capture() -> Captured {
    capture_with(Console::builder())
}

pub fn capture_with_clock(clock: Arc<dyn Clock>) -> Captured {
    capture_with(Console::builder().clock(clock))
}

pub fn capture_with(builder: consolekit::ConsoleBuilder) -> Captured {
    let out = Mem::default();
    let err = Mem::default();
    let console = builder
        .clear_mode(ClearMode::Never)
        .stdout(Target::writer(out.clone()))
        .stderr(Target::writer(err.clone()))
        .build()
        .unwrap();
    Captured { console, out, err }
}

pub fn text(m: &Mem) -> String {
    String::from_utf8(m.0.lock().unwrap().clone()).unwrap()
}

pub fn lines(m: &Mem) -> Vec<String> {
    text(m).lines().map(ToString::to_string).collect()
}

/// Clock that only moves when told to.
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        })
    }
    pub fn advance(&self, d: Duration) {
        *self.offset.lock().unwrap() += d;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().unwrap()
    }
}
