use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::horaire::horaire_error::HoraireError;
use crate::horaire::raw::{RouteStop, StopTimesEntry, TransitRoute};

/// explicit configuration for the API boundary; nothing here is a
/// process-wide global.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// agency prefix prepended to bare route/stop ids ("C1" -> "SEM:C1")
    pub id_prefix: String,
    /// origin header the API expects from script clients
    pub origin: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://data.mobilites-m.fr/api"),
            id_prefix: String::from("SEM:"),
            origin: String::from("mtag"),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// qualify a bare id with the agency prefix; ids that already carry
    /// an agency (contain ':') pass through unchanged.
    pub fn qualify(&self, id: &str) -> String {
        if id.contains(':') {
            id.to_string()
        } else {
            format!("{}{}", self.id_prefix, id)
        }
    }
}

/// blocking client for the Métromobilité OTP index endpoints. one
/// instance per invocation; requests are strictly sequential.
pub struct MetromobiliteClient {
    config: ApiConfig,
    http: reqwest::blocking::Client,
}

impl MetromobiliteClient {
    pub fn new(config: ApiConfig) -> Result<Self, HoraireError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| HoraireError::FetchFailed {
                url: config.base_url.clone(),
                source,
            })?;
        Ok(Self { config, http })
    }

    /// all routes known to the network.
    pub fn routes(&self) -> Result<Vec<TransitRoute>, HoraireError> {
        self.get_json(&format!("{}/routers/default/index/routes", self.config.base_url))
    }

    /// the stops served by a route, both directions in one sequence.
    pub fn stops(&self, route_id: &str) -> Result<Vec<RouteStop>, HoraireError> {
        self.get_json(&self.stops_url(route_id))
    }

    /// upcoming arrivals for a stop cluster, filtered to one route.
    /// with a date, the theoretical schedule for that service day is
    /// returned instead of the realtime view.
    pub fn stoptimes(
        &self,
        route_id: &str,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<StopTimesEntry>, HoraireError> {
        self.get_json(&self.stoptimes_url(route_id, stop_id, date))
    }

    pub fn stops_url(&self, route_id: &str) -> String {
        format!(
            "{}/routers/default/index/routes/{}/stops",
            self.config.base_url,
            self.config.qualify(route_id)
        )
    }

    pub fn stoptimes_url(
        &self,
        route_id: &str,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> String {
        let day = match date {
            Some(d) => format!("/{}", d.format("%Y%m%d")),
            None => String::new(),
        };
        format!(
            "{}/routers/default/index/clusters/{}/stoptimes{}?route={}",
            self.config.base_url,
            self.config.qualify(stop_id),
            day,
            self.config.qualify(route_id)
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HoraireError> {
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .header("origin", &self.config.origin)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| HoraireError::FetchFailed {
                url: url.to_string(),
                source,
            })?;
        response.json().map_err(|source| HoraireError::DecodeFailed {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{ApiConfig, MetromobiliteClient};

    fn client() -> MetromobiliteClient {
        MetromobiliteClient::new(ApiConfig::default()).expect("client should build")
    }

    #[test]
    fn test_qualify_adds_prefix_once() {
        let config = ApiConfig::default();
        assert_eq!(config.qualify("C1"), "SEM:C1");
        assert_eq!(config.qualify("SEM:C1"), "SEM:C1");
    }

    #[test]
    fn test_stoptimes_url_realtime() {
        assert_eq!(
            client().stoptimes_url("C1", "GENCHAVANT", None),
            "https://data.mobilites-m.fr/api/routers/default/index/clusters/SEM:GENCHAVANT/stoptimes?route=SEM:C1"
        );
    }

    #[test]
    fn test_stoptimes_url_theoretical_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
        assert_eq!(
            client().stoptimes_url("C1", "GENCHAVANT", Some(date)),
            "https://data.mobilites-m.fr/api/routers/default/index/clusters/SEM:GENCHAVANT/stoptimes/20240315?route=SEM:C1"
        );
    }

    #[test]
    fn test_unreachable_host_surfaces_as_fetch_failed() {
        let config = ApiConfig {
            base_url: String::from("http://127.0.0.1:9"),
            // bounds the test when the connection hangs instead of refusing
            timeout: std::time::Duration::from_millis(250),
            ..ApiConfig::default()
        };
        let client = MetromobiliteClient::new(config).expect("client should build");
        let result = client.routes();
        assert!(matches!(
            result,
            Err(crate::horaire::HoraireError::FetchFailed { .. })
        ));
    }

    #[test]
    fn test_stops_url() {
        assert_eq!(
            client().stops_url("A"),
            "https://data.mobilites-m.fr/api/routers/default/index/routes/SEM:A/stops"
        );
    }
}
