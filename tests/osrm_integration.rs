//! Live road-path lookup against an OSRM server.
//!
//! Needs network access; run with `--ignored`. Set `OSRM_BASE_URL` to use a
//! local server instead of the public demo.

mod fixtures;

use courier_sequencer::model::DeliveryStop;
use courier_sequencer::osrm::{OsrmClient, OsrmConfig};
use courier_sequencer::polyline::Polyline;
use courier_sequencer::sequencer::{SequenceOptions, sequence};
use courier_sequencer::traits::RoadPathProvider;

use fixtures::{DEPOT, ROUTE_002};

#[test]
#[ignore]
fn osrm_route_follows_sequenced_waypoints() {
    let config = OsrmConfig::from_env().expect("valid OSRM config");
    let client = OsrmClient::new(config).expect("build OSRM client");

    let stops: Vec<DeliveryStop> = ROUTE_002
        .iter()
        .map(|location| DeliveryStop::new(location.name, location.coords()))
        .collect();
    let route = sequence(DEPOT.coords(), &stops, &SequenceOptions::default());
    let waypoints = route.waypoints();

    let path = client.road_path(&waypoints).expect("road path");

    assert!(path.polyline.points().len() >= 2, "road path should have geometry");
    // Roads are never shorter than the straight line through the same waypoints.
    let straight = Polyline::straight_line(&waypoints).length_km();
    assert!(
        path.distance_km >= straight * 0.95,
        "road distance {} km shorter than straight line {} km",
        path.distance_km,
        straight
    );
}
