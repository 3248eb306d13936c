//! Unit tests for the fewest-changes route search.

use super::*;
use crate::domain::{Line, LineId};

fn line(id: &str, stations: &[&str]) -> Line {
    Line::new(
        LineId::parse(id).unwrap(),
        format!("Line {id}"),
        stations.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

fn network(lines: Vec<Line>) -> Network {
    Network::from_lines("Test City", lines).unwrap()
}

fn route(net: &Network, from: &str, to: &str) -> Result<Itinerary, RouteError> {
    let config = PlannerConfig::default();
    Planner::new(net, &config).find_route(from, to)
}

fn segment_stations(it: &Itinerary) -> Vec<Vec<&str>> {
    it.segments()
        .iter()
        .map(|s| s.stations().iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn single_line_route() {
    let net = network(vec![line("1", &["A", "B", "C", "D"])]);

    let it = route(&net, "A", "D").unwrap();

    assert_eq!(segment_stations(&it), vec![vec!["A", "B", "C", "D"]]);
    assert_eq!(it.interchanges(), 0);
    assert_eq!(it.total_stations(), 4);
    assert_eq!(it.estimated_minutes(), 8);
    // Second band of the default table
    assert_eq!(it.fare(), 20);
}

#[test]
fn one_change_route() {
    let net = network(vec![line("1", &["A", "M", "B"]), line("2", &["M", "C", "D"])]);

    let it = route(&net, "A", "D").unwrap();

    assert_eq!(segment_stations(&it), vec![vec!["A", "M"], vec!["M", "C", "D"]]);
    assert_eq!(it.segments()[0].line_id().as_str(), "1");
    assert_eq!(it.segments()[1].line_id().as_str(), "2");
    assert_eq!(it.interchanges(), 1);
    assert_eq!(it.total_stations(), 4);
    assert_eq!(it.estimated_minutes(), 4 * 2 + 5);
}

#[test]
fn unknown_source_named() {
    let net = network(vec![line("1", &["A", "B"])]);

    let err = route(&net, "Unknown", "A").unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidStation {
            side: StationSide::Source,
            name: "Unknown".into()
        }
    );
}

#[test]
fn unknown_destination_named() {
    let net = network(vec![line("1", &["A", "B"])]);

    let err = route(&net, "A", "Nowhere").unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidStation {
            side: StationSide::Destination,
            name: "Nowhere".into()
        }
    );
}

#[test]
fn names_are_case_sensitive() {
    let net = network(vec![line("1", &["Esplanade", "Park Street"])]);
    assert!(matches!(
        route(&net, "esplanade", "Park Street"),
        Err(RouteError::InvalidStation { .. })
    ));
}

#[test]
fn same_station_is_trivial() {
    let net = network(vec![line("1", &["A", "M", "B"]), line("2", &["M", "C"])]);

    for station in net.stations() {
        assert_eq!(
            route(&net, station, station).unwrap_err(),
            RouteError::TrivialQuery(station.clone())
        );
    }
}

#[test]
fn disconnected_lines() {
    let net = network(vec![line("1", &["A", "B"]), line("2", &["C", "D"])]);

    let err = route(&net, "A", "D").unwrap_err();
    assert_eq!(
        err,
        RouteError::NoRouteFound {
            from: "A".into(),
            to: "D".into()
        }
    );
}

#[test]
fn empty_network_rejects_everything() {
    let net = network(vec![]);
    assert!(matches!(
        route(&net, "A", "B"),
        Err(RouteError::InvalidStation {
            side: StationSide::Source,
            ..
        })
    ));
}

#[test]
fn prefers_fewer_changes_over_fewer_stations() {
    // Direct: S .. T over 7 stations on line 1.
    // Shortcut: S -> X on line 2, X -> T on line 3 (3 stations, 1 change).
    let net = network(vec![
        line("1", &["S", "P1", "P2", "P3", "P4", "P5", "T"]),
        line("2", &["S", "X"]),
        line("3", &["X", "T"]),
    ]);

    let it = route(&net, "S", "T").unwrap();

    assert_eq!(it.interchanges(), 0);
    assert_eq!(it.total_stations(), 7);
    assert_eq!(it.segments()[0].line_id().as_str(), "1");
}

#[test]
fn equal_changes_prefers_fewer_stations() {
    // Two one-change routes; via Y is shorter.
    let net = network(vec![
        line("1", &["S", "Q1", "Q2", "X"]),
        line("2", &["X", "T"]),
        line("3", &["S", "Y"]),
        line("4", &["Y", "T"]),
    ]);

    let it = route(&net, "S", "T").unwrap();

    assert_eq!(it.interchanges(), 1);
    assert_eq!(it.path(), &["S", "Y", "T"]);
}

#[test]
fn picks_the_right_starting_line() {
    // Source served by two lines; only line 2 reaches the destination.
    let net = network(vec![line("1", &["A", "S", "B"]), line("2", &["S", "C", "T"])]);

    let it = route(&net, "S", "T").unwrap();

    assert!(it.is_direct());
    assert_eq!(it.segments()[0].line_id().as_str(), "2");
    assert_eq!(it.segments()[0].direction(), "Towards T");
}

#[test]
fn direction_against_declaration_order() {
    let net = network(vec![line("1", &["A", "B", "C", "D"])]);

    let it = route(&net, "D", "B").unwrap();

    assert_eq!(segment_stations(&it), vec![vec!["D", "C", "B"]]);
    assert_eq!(it.segments()[0].direction(), "Towards A");
}

#[test]
fn direction_uses_declared_terminals() {
    let net = network(vec![
        line("1", &["A", "B", "C"]).with_terminals("Dakshineswar", "Kavi Subhash"),
    ]);

    let it = route(&net, "A", "B").unwrap();
    assert_eq!(it.segments()[0].direction(), "Towards Kavi Subhash");

    let it = route(&net, "C", "A").unwrap();
    assert_eq!(it.segments()[0].direction(), "Towards Dakshineswar");
}

#[test]
fn two_changes() {
    let net = network(vec![
        line("1", &["A", "X"]),
        line("2", &["X", "Y"]),
        line("3", &["Y", "Z"]),
    ]);

    let it = route(&net, "A", "Z").unwrap();

    assert_eq!(
        segment_stations(&it),
        vec![vec!["A", "X"], vec!["X", "Y"], vec!["Y", "Z"]]
    );
    assert_eq!(it.interchanges(), 2);
    assert_eq!(it.total_stations(), 4);
    assert_eq!(it.estimated_minutes(), 4 * 2 + 2 * 5);
}

#[test]
fn segments_meet_at_interchanges() {
    let net = network(vec![
        line("1", &["A", "B", "X", "C"]),
        line("2", &["D", "X", "Y", "E"]),
        line("3", &["F", "Y", "G"]),
    ]);

    let it = route(&net, "A", "G").unwrap();

    for pair in it.segments().windows(2) {
        assert_eq!(pair[0].alight_station(), pair[1].board_station());
    }
    assert_eq!(it.origin(), "A");
    assert_eq!(it.destination(), "G");
}

#[test]
fn repeated_queries_are_identical() {
    // Two equal-cost routes: via X or via Y.
    let net = network(vec![
        line("1", &["S", "X", "T"]),
        line("2", &["S", "Y", "T"]),
    ]);

    let first = route(&net, "S", "T").unwrap();
    for _ in 0..10 {
        assert_eq!(route(&net, "S", "T").unwrap(), first);
    }

    // Rebuilding the network does not change the answer either.
    let rebuilt = network(vec![
        line("1", &["S", "X", "T"]),
        line("2", &["S", "Y", "T"]),
    ]);
    assert_eq!(route(&rebuilt, "S", "T").unwrap(), first);
}

#[test]
fn reverse_query_same_counts() {
    let net = network(vec![
        line("1", &["A", "B", "X", "C"]),
        line("2", &["D", "X", "Y", "E"]),
        line("3", &["F", "Y", "G"]),
    ]);

    let there = route(&net, "A", "G").unwrap();
    let back = route(&net, "G", "A").unwrap();

    assert_eq!(there.interchanges(), back.interchanges());
    assert_eq!(there.total_stations(), back.total_stations());
}

#[test]
fn error_display() {
    let err = RouteError::InvalidStation {
        side: StationSide::Destination,
        name: "Atlantis".into(),
    };
    assert_eq!(err.to_string(), "unknown destination station: \"Atlantis\"");

    let err = RouteError::TrivialQuery("Esplanade".into());
    assert_eq!(
        err.to_string(),
        "source and destination are the same station: \"Esplanade\""
    );

    let err = RouteError::NoRouteFound {
        from: "A".into(),
        to: "B".into(),
    };
    assert_eq!(err.to_string(), "no route from \"A\" to \"B\"");
}

#[test]
fn cost_orders_interchanges_first() {
    let one_change = Cost {
        interchanges: 1,
        stations: 2,
    };
    let long_direct = Cost {
        interchanges: 0,
        stations: 30,
    };
    assert!(long_direct < one_change);
    assert_eq!(Cost::ZERO.after(EdgeKind::Ride).stations, 1);
    assert_eq!(Cost::ZERO.after(EdgeKind::Transfer).interchanges, 1);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    const POOL: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

    /// Up to four lines, each an ordering of 1-5 distinct pool stations.
    fn lines_strategy() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
        prop::collection::vec(
            prop::sample::subsequence(POOL.to_vec(), 1..=5).prop_shuffle(),
            1..=4,
        )
    }

    fn build(raw: &[Vec<&'static str>]) -> Network {
        let lines = raw
            .iter()
            .enumerate()
            .map(|(i, stations)| line(&i.to_string(), stations))
            .collect();
        network(lines)
    }

    /// Reference optimum computed by Bellman-Ford relaxation straight from
    /// the raw line lists, independent of `Graph`.
    fn reference_cost(raw: &[Vec<&'static str>], from: &str, to: &str) -> Option<Cost> {
        let mut best: HashMap<(&str, usize), Cost> = HashMap::new();
        for (li, stations) in raw.iter().enumerate() {
            if stations.contains(&from) {
                best.insert((from, li), Cost::ZERO);
            }
        }

        loop {
            let mut changed = false;
            let snapshot: Vec<((&str, usize), Cost)> =
                best.iter().map(|(k, v)| (*k, *v)).collect();

            for ((station, li), cost) in snapshot {
                let stations = &raw[li];
                let pos = stations.iter().position(|s| *s == station).unwrap();

                let mut offers = Vec::new();
                if pos > 0 {
                    offers.push(((stations[pos - 1], li), cost.after(EdgeKind::Ride)));
                }
                if pos + 1 < stations.len() {
                    offers.push(((stations[pos + 1], li), cost.after(EdgeKind::Ride)));
                }
                for (other, other_stations) in raw.iter().enumerate() {
                    if other != li && other_stations.contains(&station) {
                        offers.push(((station, other), cost.after(EdgeKind::Transfer)));
                    }
                }

                for (key, offer) in offers {
                    if best.get(&key).is_none_or(|known| offer < *known) {
                        best.insert(key, offer);
                        changed = true;
                    }
                }
            }

            if !changed {
                break;
            }
        }

        best.iter()
            .filter(|((station, _), _)| *station == to)
            .map(|(_, cost)| *cost)
            .min()
    }

    proptest! {
        /// The search finds the lexicographically cheapest route
        #[test]
        fn route_is_optimal(
            raw in lines_strategy(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let net = build(&raw);
            let stations = net.stations();
            let from = stations[a.index(stations.len())].as_str();
            let to = stations[b.index(stations.len())].as_str();

            let result = route(&net, from, to);

            if from == to {
                prop_assert_eq!(result, Err(RouteError::TrivialQuery(from.to_string())));
                return Ok(());
            }

            match (reference_cost(&raw, from, to), result) {
                (Some(expected), Ok(it)) => {
                    prop_assert_eq!(it.interchanges(), expected.interchanges);
                    prop_assert_eq!(it.total_stations(), expected.stations + 1);
                    prop_assert_eq!(it.origin(), from);
                    prop_assert_eq!(it.destination(), to);
                }
                (None, Err(RouteError::NoRouteFound { .. })) => {}
                (expected, result) => {
                    prop_assert!(false, "reference {:?} but search gave {:?}", expected, result);
                }
            }
        }

        /// Itineraries are internally consistent
        #[test]
        fn itinerary_consistent(
            raw in lines_strategy(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let net = build(&raw);
            let stations = net.stations();
            let from = stations[a.index(stations.len())].as_str();
            let to = stations[b.index(stations.len())].as_str();

            if let Ok(it) = route(&net, from, to) {
                prop_assert_eq!(it.interchanges() + 1, it.segments().len());

                // Path has no repeated station
                let mut seen = std::collections::HashSet::new();
                for s in it.path() {
                    prop_assert!(seen.insert(s.as_str()));
                }

                // Each segment rides at least one edge and meets the next
                for seg in it.segments() {
                    prop_assert!(seg.stations().len() >= 2);
                    prop_assert!(seg.direction().starts_with("Towards "));
                }
                for pair in it.segments().windows(2) {
                    prop_assert_eq!(pair[0].alight_station(), pair[1].board_station());
                }

                let config = PlannerConfig::default();
                prop_assert_eq!(it.fare(), config.fare(it.total_stations()));
                prop_assert_eq!(
                    it.estimated_time(),
                    config.estimated_time(it.total_stations(), it.interchanges())
                );
            }
        }

        /// Reverse queries have the same cost
        #[test]
        fn reverse_symmetric(
            raw in lines_strategy(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let net = build(&raw);
            let stations = net.stations();
            let from = stations[a.index(stations.len())].as_str();
            let to = stations[b.index(stations.len())].as_str();

            match (route(&net, from, to), route(&net, to, from)) {
                (Ok(there), Ok(back)) => {
                    prop_assert_eq!(there.interchanges(), back.interchanges());
                    prop_assert_eq!(there.total_stations(), back.total_stations());
                }
                (Err(RouteError::NoRouteFound { .. }), Err(RouteError::NoRouteFound { .. })) => {}
                (Err(RouteError::TrivialQuery(_)), Err(RouteError::TrivialQuery(_))) => {}
                (there, back) => prop_assert!(false, "asymmetric: {:?} vs {:?}", there, back),
            }
        }
    }
}
