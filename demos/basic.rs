use consolekit::{count, group, group_end, info, log, time, time_end, warn, ConsoleError};

fn main() -> Result<(), ConsoleError> {
    // The process-wide console reads its settings on first use:
    //   CONSOLE_INDENT=4 CONSOLE_CLEAR=never
    log!("hello %s", "world")?;
    info!("%d percent of %s used", 92, "disk")?;
    warn!("disk almost full:", 92)?;

    group!("startup")?;
    time(Some("startup"))?;
    for _ in 0..3 {
        count(Some("workers"))?;
    }
    consolekit::scope_time!("sleep", {
        std::thread::sleep(std::time::Duration::from_millis(10));
    });
    time_end(Some("startup"))?;
    group_end()?;

    consolekit::trace!("where am I")?;
    Ok(())
}
