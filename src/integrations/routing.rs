use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("directions request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("directions response contained no route")]
    NoRoute,
}

pub const DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Blocking client for the external directions API. One request per
/// vehicle per refresh; a failure here is recoverable by the caller
/// (that vehicle's route is skipped, the rest of the refresh continues).
pub struct RoutingClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
struct RouteLeg {
    steps: Vec<RouteStep>,
}

#[derive(Debug, Deserialize)]
struct RouteStep {
    start_location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn format_point(point: (f64, f64)) -> String {
    format!("{},{}", point.0, point.1)
}

impl RoutingClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DIRECTIONS_API_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url,
            api_key,
        }
    }

    /// `MAPS_API_KEY` is optional; without it the dashboard renders
    /// markers only, no driving routes.
    pub fn from_env() -> Option<Self> {
        std::env::var("MAPS_API_KEY").ok().map(Self::new)
    }

    /// Fetches a driving route from `origin` through `stops` in order and
    /// returns the start coordinate of every step along the way.
    pub fn directions(
        &self,
        origin: (f64, f64),
        stops: &[(f64, f64)],
    ) -> Result<Vec<(f64, f64)>, RoutingError> {
        let destination = stops.last().copied().unwrap_or(origin);
        let waypoints: Vec<String> = stops
            .iter()
            .take(stops.len().saturating_sub(1))
            .copied()
            .map(format_point)
            .collect();

        let response: DirectionsResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", format_point(origin)),
                ("destination", format_point(destination)),
                ("waypoints", waypoints.join("|")),
                ("mode", "driving".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let route = response.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        Ok(route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(|step| (step.start_location.lat, step.start_location.lng))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_response_parses_step_coordinates() {
        let body = r#"{
            "routes": [{
                "legs": [
                    {"steps": [
                        {"start_location": {"lat": 28.61, "lng": 77.11}},
                        {"start_location": {"lat": 28.62, "lng": 77.13}}
                    ]},
                    {"steps": [
                        {"start_location": {"lat": 28.65, "lng": 77.20}}
                    ]}
                ]
            }]
        }"#;
        let parsed: DirectionsResponse = serde_json::from_str(body).unwrap();
        let route = &parsed.routes[0];
        let points: Vec<_> = route
            .legs
            .iter()
            .flat_map(|leg| &leg.steps)
            .map(|step| (step.start_location.lat, step.start_location.lng))
            .collect();
        assert_eq!(points, [(28.61, 77.11), (28.62, 77.13), (28.65, 77.20)]);
    }
}
