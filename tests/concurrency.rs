mod helpers;
use helpers::*;

use consolekit::{values, ConsoleSink};

const N_THREADS: usize = 4;
const N_CALLS: usize = 50;

#[test]
fn counters_and_lines_stay_whole_under_concurrency() {
    let c = capture();

    std::thread::scope(|s| {
        for t in 0..N_THREADS {
            let console = &c.console;
            s.spawn(move || {
                for i in 0..N_CALLS {
                    console.count(Some("shared")).unwrap();
                    console.log(values!["T%d #%d", t, i]).unwrap();
                }
            });
        }
    });

    assert_eq!(c.console.count_of("shared"), Some((N_THREADS * N_CALLS) as u64));

    let lines = c.out_lines();
    assert_eq!(lines.len(), 2 * N_THREADS * N_CALLS);
    let mut counts: Vec<u64> = lines
        .iter()
        .filter_map(|l| l.strip_prefix("shared: "))
        .map(|n| n.parse().unwrap())
        .collect();
    counts.sort_unstable();
    let expected: Vec<u64> = (1..=(N_THREADS * N_CALLS) as u64).collect();
    assert_eq!(counts, expected);
    for l in lines.iter().filter(|l| !l.starts_with("shared: ")) {
        assert!(l.starts_with('T') && l.contains(" #"), "torn line: {l}");
    }
}
