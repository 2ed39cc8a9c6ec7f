use serde::Deserialize;

use crate::horaire::Seconds;

/// one element of the stoptimes payload: a route pattern (direction of
/// travel) and its next predicted arrivals. `pattern` and `times` can
/// both be absent in degraded responses.
#[derive(Deserialize, Debug, Clone)]
pub struct StopTimesEntry {
    pub pattern: Option<StopPattern>,
    #[serde(default)]
    pub times: Vec<RawTime>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StopPattern {
    pub id: Option<String>,
    pub desc: Option<String>,
    pub dir: Option<u32>,
}

/// a single predicted arrival. both fields are required by the API
/// contract but modelled as `Option` so a malformed record surfaces as
/// an `InvalidArrivalData` skip instead of failing the whole decode.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct RawTime {
    #[serde(rename = "realtimeArrival")]
    pub realtime_arrival: Option<Seconds>,
    pub realtime: Option<bool>,
}

/// a transit line, from the route index endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct TransitRoute {
    pub id: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    #[serde(rename = "longName")]
    pub long_name: String,
}

/// one stop served by a route, from the route stops endpoint. the API
/// lists both directions of travel in one flat sequence.
#[derive(Deserialize, Debug, Clone)]
pub struct RouteStop {
    pub name: String,
    #[serde(rename = "gtfsId")]
    pub gtfs_id: String,
    #[serde(rename = "clusterGtfsId")]
    pub cluster_gtfs_id: Option<String>,
}
