use std::cmp::Ordering;
use std::fmt::Display;

/// elapsed seconds since the service-day reference midnight, as reported
/// by the API. not a wall-clock epoch; values past 86400 are late-night
/// service on the same service day.
pub type Seconds = u32;

/// one predicted arrival at a stop. `realtime` distinguishes a live
/// vehicle-tracking prediction from a static timetable value.
#[derive(Debug, Clone, Copy)]
pub struct Arrival {
    pub seconds: Seconds,
    pub realtime: bool,
}

impl Arrival {
    pub fn new(seconds: Seconds, realtime: bool) -> Self {
        Self { seconds, realtime }
    }
}

// ordering and equality by arrival time only; the realtime flag is
// carried for display, not comparison
impl PartialEq for Arrival {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl Eq for Arrival {}

impl PartialOrd for Arrival {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Arrival {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Display for Arrival {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.realtime {
            write!(f, "{}", self.seconds)
        } else {
            write!(f, "{}~", self.seconds)
        }
    }
}
