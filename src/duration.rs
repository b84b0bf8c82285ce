use core::fmt;
use std::time::Duration;

/// Display adapter rendering elapsed time for `timeLog`/`timeEnd` lines.
///
/// The unit grows with the magnitude: `ns`, `us`, `ms`, `s`, then compound
/// minute/hour/day forms with millisecond precision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let nanos = self.0.subsec_nanos();
        let ms = nanos / 1_000_000;
        match secs {
            0 if nanos < 1_000 => write!(f, "{nanos} ns"),
            0 if nanos < 1_000_000 => write!(f, "{} us", nanos / 1_000),
            0 => write!(f, "{ms}.{:03} ms", (nanos / 1_000) % 1_000),
            1..=59 => write!(f, "{secs}.{ms:03} s"),
            60..=3_599 => write!(f, "{}m{:02}.{ms:03}s", secs / 60, secs % 60),
            3_600..=86_399 => write!(
                f,
                "{}h{:02}m{:02}.{ms:03}s",
                secs / 3_600,
                (secs % 3_600) / 60,
                secs % 60
            ),
            _ => {
                let rem = secs % 86_400;
                write!(
                    f,
                    "{}d {:02}h{:02}m{:02}.{ms:03}s",
                    secs / 86_400,
                    rem / 3_600,
                    (rem % 3_600) / 60,
                    rem % 60
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(d: Duration) -> String {
        HumanDuration(d).to_string()
    }

    #[test]
    fn formats_all_ranges() {
        assert_eq!(show(Duration::ZERO), "0 ns");
        assert_eq!(show(Duration::from_nanos(500)), "500 ns");
        assert_eq!(show(Duration::from_nanos(1_500)), "1 us");
        assert_eq!(show(Duration::from_nanos(1_234_000)), "1.234 ms");
        assert_eq!(show(Duration::from_millis(1_234)), "1.234 s");
        assert_eq!(show(Duration::from_secs(65)), "1m05.000s");
        assert_eq!(show(Duration::from_secs(3 * 3600 + 7 * 60 + 5)), "3h07m05.000s");
        assert_eq!(show(Duration::from_secs(2 * 86_400 + 5)), "2d 00h00m05.000s");
    }
}
