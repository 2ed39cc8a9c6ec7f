use crate::horaire::horaire_error::HoraireError;
use crate::horaire::raw::{RawTime, StopTimesEntry};
use crate::horaire::Arrival;

/// only the two soonest predictions of each raw entry are kept; the API
/// already returns `times` in ascending order, so truncation happens
/// before any sorting.
const ARRIVALS_PER_ENTRY: usize = 2;

/// upcoming arrivals for one destination, ascending by arrival time.
#[derive(Debug, Clone)]
pub struct DestinationBucket {
    pub destination: String,
    pub arrivals: Vec<Arrival>,
}

/// arrivals at a stop grouped by destination, in first-seen destination
/// order. built once per query and discarded after rendering.
#[derive(Debug, Default)]
pub struct DepartureBoard {
    buckets: Vec<DestinationBucket>,
    skipped: usize,
}

impl DepartureBoard {
    pub fn from_entries(entries: &[StopTimesEntry]) -> Self {
        let mut board = Self::default();
        for entry in entries {
            board.push_entry(entry);
        }
        board
    }

    fn push_entry(&mut self, entry: &StopTimesEntry) {
        let destination = match entry.pattern.as_ref().and_then(|p| p.desc.as_deref()) {
            Some(desc) => desc,
            None => return,
        };

        let mut batch = Vec::with_capacity(ARRIVALS_PER_ENTRY);
        for time in entry.times.iter().take(ARRIVALS_PER_ENTRY) {
            match convert(destination, time) {
                Ok(arrival) => batch.push(arrival),
                Err(e) => {
                    log::warn!("skipping entry: {e}");
                    self.skipped += 1;
                    return;
                }
            }
        }
        if batch.is_empty() {
            return;
        }
        batch.sort();

        match self
            .buckets
            .iter_mut()
            .find(|b| b.destination == destination)
        {
            Some(bucket) => {
                // merged buckets are re-sorted but never truncated back
                // down to two; later entries for the same destination
                // grow the bucket
                bucket.arrivals.extend(batch);
                bucket.arrivals.sort();
            }
            None => self.buckets.push(DestinationBucket {
                destination: destination.to_string(),
                arrivals: batch,
            }),
        }
    }

    pub fn buckets(&self) -> &[DestinationBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// raw entries dropped because a time record was structurally
    /// malformed; reported to the user after rendering.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// user-facing notice about dropped entries, so a reduced report is
    /// never indistinguishable from a clean one.
    pub fn skip_notice(&self) -> Option<String> {
        match self.skipped {
            0 => None,
            1 => Some(String::from("1 arrival entry was malformed and skipped")),
            n => Some(format!("{n} arrival entries were malformed and skipped")),
        }
    }
}

fn convert(destination: &str, raw: &RawTime) -> Result<Arrival, HoraireError> {
    match (raw.realtime_arrival, raw.realtime) {
        (Some(seconds), Some(realtime)) => Ok(Arrival::new(seconds, realtime)),
        _ => Err(HoraireError::InvalidArrivalData {
            destination: destination.to_string(),
        }),
    }
}
