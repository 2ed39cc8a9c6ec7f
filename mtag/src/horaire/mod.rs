pub mod app;
mod arrival;
mod board;
mod client;
mod horaire_error;
mod raw;
mod render;
pub mod service_day;
mod stops;

pub use arrival::{Arrival, Seconds};
pub use board::{DepartureBoard, DestinationBucket};
pub use client::{ApiConfig, MetromobiliteClient};
pub use horaire_error::HoraireError;
pub use raw::{RawTime, RouteStop, StopPattern, StopTimesEntry, TransitRoute};
pub use render::{compact_report, verbose_report};
pub use stops::{direction_listing, route_listing, stops_matching};
