//! queries the Grenoble Métromobilité API for realtime bus and tram
//! arrivals and prints them grouped by destination.
use clap::Parser;
use mtag::horaire::app::HoraireApp;

fn main() {
    env_logger::init();
    let args = HoraireApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
