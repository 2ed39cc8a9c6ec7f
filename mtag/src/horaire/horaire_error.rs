#[derive(thiserror::Error, Debug)]
pub enum HoraireError {
    #[error("Failed to reach the Métromobilité API at '{url}': {source}")]
    FetchFailed { url: String, source: reqwest::Error },
    #[error("Could not decode the response from '{url}': {source}")]
    DecodeFailed { url: String, source: reqwest::Error },
    #[error("Arrival record toward '{destination}' is missing realtimeArrival/realtime")]
    InvalidArrivalData { destination: String },
    #[error("Route '{route}' has no stop named '{name}' (check spelling, or list stops)")]
    UnknownStop { name: String, route: String },
}
