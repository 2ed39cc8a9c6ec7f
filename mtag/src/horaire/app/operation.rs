use chrono::{Local, NaiveDate};
use clap::{value_parser, Subcommand};

use crate::horaire::raw::StopTimesEntry;
use crate::horaire::{
    compact_report, direction_listing, route_listing, service_day, stops_matching,
    verbose_report, ApiConfig, DepartureBoard, HoraireError, MetromobiliteClient,
};

#[derive(Debug, Clone, Subcommand)]
pub enum HoraireOperation {
    /// upcoming arrivals for a stop, grouped by destination
    Times {
        /// stop or cluster id, with or without the agency prefix
        #[arg(long)]
        stop: String,
        /// route to filter arrivals to
        #[arg(long, default_value_t = String::from("C1"))]
        route: String,
        /// compact single-line output
        #[arg(long)]
        simple: bool,
        /// theoretical schedule for this service day instead of the realtime view
        #[arg(long, value_parser = value_parser!(NaiveDate))]
        date: Option<NaiveDate>,
    },
    /// arrivals for every stop of the route matching a name
    Stop {
        /// stop name or cluster GTFS id as listed by `stops`
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = String::from("C1"))]
        route: String,
        /// compact single-line output
        #[arg(long)]
        simple: bool,
    },
    /// list the stops of a route, split into its two directions
    Stops {
        #[arg(long, default_value_t = String::from("C1"))]
        route: String,
    },
    /// list all routes of the network
    Routes,
}

impl HoraireOperation {
    pub fn run(&self, config: &ApiConfig) -> Result<(), HoraireError> {
        let client = MetromobiliteClient::new(config.clone())?;
        match self {
            HoraireOperation::Times {
                stop,
                route,
                simple,
                date,
            } => {
                let entries = client.stoptimes(route, stop, *date)?;
                // countdowns only make sense against the live clock, not
                // a theoretical day
                let now = date.is_none().then(now_seconds);
                render_stoptimes(&entries, *simple, now);
                Ok(())
            }
            HoraireOperation::Stop {
                name,
                route,
                simple,
            } => {
                let stops = client.stops(route)?;
                let matches = stops_matching(&stops, name);
                if matches.is_empty() {
                    return Err(HoraireError::UnknownStop {
                        name: name.clone(),
                        route: config.qualify(route),
                    });
                }
                // one fetch per matching stop, strictly sequential
                for stop in matches {
                    println!("{} ({})", stop.name, stop.gtfs_id);
                    let entries = client.stoptimes(route, &stop.gtfs_id, None)?;
                    render_stoptimes(&entries, *simple, Some(now_seconds()));
                    println!();
                }
                Ok(())
            }
            HoraireOperation::Stops { route } => {
                let stops = client.stops(route)?;
                println!("{}", direction_listing(&stops));
                Ok(())
            }
            HoraireOperation::Routes => {
                let routes = client.routes()?;
                println!("{}", route_listing(&routes));
                Ok(())
            }
        }
    }
}

fn now_seconds() -> i64 {
    service_day::seconds_since_midnight(Local::now().naive_local())
}

fn render_stoptimes(entries: &[StopTimesEntry], simple: bool, now_seconds: Option<i64>) {
    let board = DepartureBoard::from_entries(entries);
    if simple {
        println!("{}", compact_report(&board, now_seconds));
    } else {
        print!("{}", verbose_report(&board));
    }
    // on stderr, not the logger: a report with dropped entries must
    // never look like a clean one, whatever the log filter is
    if let Some(notice) = board.skip_notice() {
        eprintln!("{notice}");
    }
}
