mod common;

use std::fs;

use common::fixtures_dir;
use flightgraph_lib::{load_dataset, resolve_dataset_paths, DatasetPaths};
use tempfile::tempdir;

const AIRPORTS_HEADER: &str = "IATA,Name,City,Country,Latitude,Longitude\n";
const ROUTES_HEADER: &str =
    "Airline,Source Airport IATA,Destination Airport IATA,Distance,Estimated Cost,Estimated Duration\n";

#[test]
fn fixture_dataset_loads_cleanly() {
    let dataset = load_dataset(&DatasetPaths::in_dir(fixtures_dir()));
    assert!(dataset.is_clean(), "{:?}", dataset.issues);
    assert_eq!(dataset.graph.len(), 11);
    assert_eq!(dataset.graph.route_count(), 18);

    let zurich = dataset.graph.airport("ZRH").expect("ZRH loaded");
    assert_eq!(zurich.city, "Zurich");
    assert_eq!(zurich.country, "Switzerland");
    assert_eq!(zurich.routes().len(), 3);
}

#[test]
fn fixture_airports_group_by_country() {
    let dataset = load_dataset(&DatasetPaths::in_dir(fixtures_dir()));
    let grouped = dataset.graph.airports_by_country();
    assert_eq!(
        grouped["Italy"],
        vec![
            "Lamezia Terme Airport (SUF)",
            "Leonardo da Vinci-Fiumicino Airport (FCO)",
            "Malpensa International Airport (MXP)",
        ]
    );
    assert_eq!(grouped.len(), 9);
}

#[test]
fn resolve_prefers_explicit_directory() {
    let dir = tempdir().unwrap();
    let paths = resolve_dataset_paths(Some(dir.path())).unwrap();
    assert_eq!(paths.airports, dir.path().join("airports.csv"));
    assert_eq!(paths.routes, dir.path().join("routes.csv"));
}

#[test]
fn missing_route_table_still_yields_airports() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("airports.csv"),
        format!("{AIRPORTS_HEADER}LHR,London Heathrow Airport,London,United Kingdom,51.4706,-0.461941\n"),
    )
    .unwrap();

    let dataset = load_dataset(&DatasetPaths::in_dir(dir.path()));
    assert_eq!(dataset.graph.len(), 1);
    assert_eq!(dataset.graph.route_count(), 0);
    assert_eq!(dataset.issues.len(), 1);
    assert_eq!(dataset.issues[0].path, dir.path().join("routes.csv"));
    assert!(dataset.issues[0].message.contains("not found"));
}

#[test]
fn empty_directory_reports_both_tables() {
    let dir = tempdir().unwrap();
    let dataset = load_dataset(&DatasetPaths::in_dir(dir.path()));
    assert!(dataset.graph.is_empty());
    assert_eq!(dataset.issues.len(), 2);
}

#[test]
fn malformed_rows_are_skipped_and_reported() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("airports.csv"),
        format!(
            "{AIRPORTS_HEADER}\
             LHR,London Heathrow Airport,London,United Kingdom,51.4706,-0.461941\n\
             AMS,Amsterdam Airport Schiphol,Amsterdam,Netherlands,52.308601,4.76389\n\
             CDG,Charles de Gaulle International Airport,Paris,France,north,2.55\n"
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("routes.csv"),
        format!(
            "{ROUTES_HEADER}\
             BA,LHR,AMS,370.4488,96,1.463061\n\
             BA,AMS,LHR,370.4488,96,1.463061\n\
             AF,LHR,CDG,347.1675,91,1.433959\n\
             BA,AMS,LHR,far,96,1.463061\n"
        ),
    )
    .unwrap();

    let dataset = load_dataset(&DatasetPaths::in_dir(dir.path()));
    assert_eq!(dataset.graph.len(), 2);
    assert_eq!(dataset.graph.route_count(), 2);

    let locations: Vec<_> = dataset
        .issues
        .iter()
        .map(|issue| {
            (
                issue.path.file_name().unwrap().to_string_lossy().into_owned(),
                issue.line,
            )
        })
        .collect();
    assert_eq!(
        locations,
        vec![
            ("airports.csv".to_string(), Some(4)),
            ("routes.csv".to_string(), Some(4)),
            ("routes.csv".to_string(), Some(5)),
        ]
    );
    assert!(dataset.issues[1].message.contains("CDG"));
}

#[test]
fn duplicate_route_rows_keep_the_last_one() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("airports.csv"),
        format!(
            "{AIRPORTS_HEADER}\
             LHR,London Heathrow Airport,London,United Kingdom,51.4706,-0.461941\n\
             AMS,Amsterdam Airport Schiphol,Amsterdam,Netherlands,52.308601,4.76389\n"
        ),
    )
    .unwrap();
    fs::write(
        dir.path().join("routes.csv"),
        format!(
            "{ROUTES_HEADER}\
             BA,LHR,AMS,370.4488,96,1.463061\n\
             KL,LHR,AMS,370.4488,80,1.5\n"
        ),
    )
    .unwrap();

    let dataset = load_dataset(&DatasetPaths::in_dir(dir.path()));
    assert!(dataset.is_clean());
    assert_eq!(dataset.graph.route_count(), 1);
    let route = dataset.graph.route("LHR", "AMS").unwrap();
    assert_eq!(route.weights.cost, 80.0);
    assert_eq!(route.weights.duration, 1.5);
}
