use itertools::Itertools;

use crate::horaire::raw::{RouteStop, TransitRoute};

/// tab-separated route index, one line per route.
pub fn route_listing(routes: &[TransitRoute]) -> String {
    routes
        .iter()
        .map(|r| format!("{}\t{}\t{}", r.id, r.short_name, r.long_name))
        .join("\n")
}

/// stops matching a name or cluster GTFS id on a route's stop list.
pub fn stops_matching<'a>(stops: &'a [RouteStop], name: &str) -> Vec<&'a RouteStop> {
    stops
        .iter()
        .filter(|s| s.name == name || s.cluster_gtfs_id.as_deref() == Some(name))
        .collect()
}

/// a route's stops grouped into its two directions of travel. the API
/// returns one direction followed by the other; the second begins at
/// the first stop whose name repeats the previous one.
pub fn direction_listing(stops: &[RouteStop]) -> String {
    let width = stops.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);

    let mut first: Vec<&RouteStop> = Vec::new();
    let mut second: Vec<&RouteStop> = Vec::new();
    let mut previous_name: Option<&str> = None;
    let mut second_direction = false;
    for stop in stops {
        if previous_name == Some(stop.name.as_str()) {
            second_direction = true;
        }
        previous_name = Some(stop.name.as_str());
        if second_direction {
            second.push(stop);
        } else {
            first.push(stop);
        }
    }

    let mut out = String::from("Direction 1 :\n");
    for stop in first {
        out.push_str(&stop_line(stop, width));
    }
    out.push_str("\nDirection 2 :\n");
    for stop in second {
        out.push_str(&stop_line(stop, width));
    }
    out
}

fn stop_line(stop: &RouteStop, width: usize) -> String {
    let pad = width.saturating_sub(stop.name.chars().count());
    format!(
        "    Stop {}{} of id : {}\n",
        stop.name,
        " ".repeat(pad),
        stop.gtfs_id
    )
}
