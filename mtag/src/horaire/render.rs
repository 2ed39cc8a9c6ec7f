use itertools::Itertools;

use crate::horaire::{Arrival, DepartureBoard};

/// below this many seconds away, the compact form switches from
/// clock-time approximation to a countdown (9.5 minutes).
const IMMINENT_THRESHOLD_SECONDS: i64 = 570;

/// separator between per-destination fragments of the compact report.
const COMPACT_SEPARATOR: &str = " ";

/// marker prefixed to compact times that are not confirmed live.
const SCHEDULED_MARKER: &str = "~";

/// multi-line report: one header per destination, one indented line per
/// arrival. an empty board renders as an empty string.
pub fn verbose_report(board: &DepartureBoard) -> String {
    let mut out = String::new();
    for bucket in board.buckets() {
        out.push_str(&format!("Bus en diréction de {}\n", bucket.destination));
        for arrival in &bucket.arrivals {
            out.push_str(&format!("    Arrivée à : {}\n", verbose_time(arrival)));
        }
    }
    out
}

/// single-line report: `<first 8 chars of destination>:[t1,t2,...]` per
/// destination, fragments joined with a space. without a reference
/// "now" (theoretical schedules for another day) countdowns make no
/// sense, so every time uses the clock-time form.
pub fn compact_report(board: &DepartureBoard, now_seconds: Option<i64>) -> String {
    board
        .buckets()
        .iter()
        .map(|bucket| {
            let prefix: String = bucket.destination.chars().take(8).collect();
            let times = bucket
                .arrivals
                .iter()
                .map(|a| compact_time(a, now_seconds))
                .join(",");
            format!("{prefix}:[{times}]")
        })
        .join(COMPACT_SEPARATOR)
}

/// `H h : M m : S : s` of the raw seconds-since-midnight value, read as
/// an elapsed duration. hours can exceed 24 for late-night service.
fn verbose_time(arrival: &Arrival) -> String {
    let (h, m, s) = split_duration(arrival.seconds as i64);
    let time = format!("{h}h:{m:02}m:{s:02}:s");
    if arrival.realtime {
        time
    } else {
        format!("{time} (théorique)")
    }
}

/// imminent arrivals show a countdown with seconds precision; distant
/// ones show the clock time of the raw value without seconds. the
/// threshold is exclusive on the imminent side.
fn compact_time(arrival: &Arrival, now_seconds: Option<i64>) -> String {
    let delta = now_seconds.map(|now| arrival.seconds as i64 - now);
    let time = match delta {
        Some(delta) if delta < IMMINENT_THRESHOLD_SECONDS => {
            let (_, m, s) = split_duration(delta.max(0));
            format!("<{m:02}m{s:02}")
        }
        _ => {
            let (h, m, _) = split_duration(arrival.seconds as i64);
            format!("{h}h{m:02}")
        }
    };
    if arrival.realtime {
        time
    } else {
        format!("{SCHEDULED_MARKER}{time}")
    }
}

fn split_duration(seconds: i64) -> (i64, i64, i64) {
    (seconds / 3600, (seconds % 3600) / 60, seconds % 60)
}

#[cfg(test)]
mod test {
    use super::{compact_report, verbose_report};
    use crate::horaire::raw::{RawTime, StopPattern, StopTimesEntry};
    use crate::horaire::DepartureBoard;

    fn board(entries: &[(&str, &[(u32, bool)])]) -> DepartureBoard {
        let raw: Vec<StopTimesEntry> = entries
            .iter()
            .map(|(desc, times)| StopTimesEntry {
                pattern: Some(StopPattern {
                    id: None,
                    desc: Some(desc.to_string()),
                    dir: None,
                }),
                times: times
                    .iter()
                    .map(|&(seconds, realtime)| RawTime {
                        realtime_arrival: Some(seconds),
                        realtime: Some(realtime),
                    })
                    .collect(),
            })
            .collect();
        DepartureBoard::from_entries(&raw)
    }

    #[test]
    fn test_verbose_report_example() {
        let board = board(&[("A", &[(100, true), (400, true)]), ("A", &[(250, false)])]);
        let report = verbose_report(&board);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Bus en diréction de A",
                "    Arrivée à : 0h:01m:40:s",
                "    Arrivée à : 0h:04m:10:s (théorique)",
                "    Arrivée à : 0h:06m:40:s",
            ]
        );
    }

    #[test]
    fn test_verbose_hours_minutes_seconds() {
        let board = board(&[("A", &[(62_130, true)])]);
        assert_eq!(
            verbose_report(&board),
            "Bus en diréction de A\n    Arrivée à : 17h:15m:30:s\n"
        );
    }

    #[test]
    fn test_compact_threshold_is_exclusive_on_imminent_side() {
        let board = board(&[("Dest", &[(10_000, true)])]);
        // 569 seconds away: countdown form
        assert_eq!(compact_report(&board, Some(10_000 - 569)), "Dest:[<09m29]");
        // 570 seconds away: clock-time form of the raw value
        assert_eq!(compact_report(&board, Some(10_000 - 570)), "Dest:[2h46]");
    }

    #[test]
    fn test_compact_scheduled_marker_survives() {
        let board = board(&[("Dest", &[(10_000, false)])]);
        assert_eq!(compact_report(&board, Some(9_900)), "Dest:[~<01m40]");
        assert_eq!(compact_report(&board, Some(0)), "Dest:[~2h46]");
    }

    #[test]
    fn test_compact_prefix_is_eight_chars_and_utf8_safe() {
        let board = board(&[("Échirolles, Denis Papin", &[(100, true)])]);
        let report = compact_report(&board, Some(0));
        assert!(report.starts_with("Échiroll:["));
    }

    #[test]
    fn test_compact_without_now_always_uses_clock_time() {
        // theoretical schedule for another day: no countdown reference,
        // near values must not render as clamped countdowns
        let board = board(&[("Dest", &[(100, true), (10_000, false)])]);
        assert_eq!(compact_report(&board, None), "Dest:[0h01,~2h46]");
    }

    #[test]
    fn test_compact_joins_destinations_with_separator() {
        let board = board(&[("AAAA", &[(100, true)]), ("BBBB", &[(200, true)])]);
        assert_eq!(compact_report(&board, Some(0)), "AAAA:[<01m40] BBBB:[<03m20]");
    }

    #[test]
    fn test_compact_past_arrival_clamps_to_zero() {
        let board = board(&[("Dest", &[(100, true)])]);
        assert_eq!(compact_report(&board, Some(160)), "Dest:[<00m00]");
    }

    #[test]
    fn test_empty_board_renders_empty() {
        let board = board(&[]);
        assert_eq!(verbose_report(&board), "");
        assert_eq!(compact_report(&board, Some(0)), "");
    }
}
