//! Dataset loading and consistency checks

use crate::model::Dataset;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Dataset compiled into the binary
const BUNDLED_JSON: &str = include_str!("../../data/routes.json");

/// File names expected in a CSV dataset directory
pub const AIRLINES_CSV: &str = "airlines.csv";
pub const AIRPORTS_CSV: &str = "airports.csv";
pub const ROUTES_CSV: &str = "routes.csv";

/// Load the dataset bundled with the app
pub fn bundled() -> Result<Dataset> {
    parse_json(BUNDLED_JSON).context("Bundled dataset is invalid")
}

/// Parse a dataset from its JSON representation
pub fn parse_json(contents: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(contents)?;
    Ok(dataset)
}

/// Load a dataset from a JSON file
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_json(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Read every record of a headed CSV stream
pub fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

fn read_csv_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_csv(file).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load a dataset from a directory holding airlines.csv, airports.csv and routes.csv
pub fn load_csv_dir<P: AsRef<Path>>(dir: P) -> Result<Dataset> {
    let dir = dir.as_ref();
    let airlines = read_csv_file(&dir.join(AIRLINES_CSV))?;
    let airports = read_csv_file(&dir.join(AIRPORTS_CSV))?;
    let routes = read_csv_file(&dir.join(ROUTES_CSV))?;
    Ok(Dataset::new(routes, airlines, airports))
}

/// Load a dataset from a JSON file or a CSV directory
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    if path.is_dir() {
        log::debug!("Loading CSV dataset from {}", path.display());
        load_csv_dir(path)
    } else {
        log::debug!("Loading JSON dataset from {}", path.display());
        load_json(path)
    }
}

/// Describe every route that references an unknown airline or airport
pub fn validate(dataset: &Dataset) -> Vec<String> {
    let airline_ids: HashSet<_> = dataset.airlines.iter().map(|a| a.id).collect();
    let airport_codes: HashSet<&str> = dataset.airports.iter().map(|a| a.code.as_str()).collect();

    let mut problems = Vec::new();
    for (i, route) in dataset.routes.iter().enumerate() {
        if !airline_ids.contains(&route.airline_id) {
            problems.push(format!("route {}: unknown airline {}", i, route.airline_id));
        }
        for code in [&route.source_airport_code, &route.destination_airport_code] {
            if !airport_codes.contains(code.as_str()) {
                problems.push(format!("route {}: unknown airport {}", i, code));
            }
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Airline, Airport, Route};

    const SMALL_JSON: &str = r#"{
        "routes": [
            {"airline": 1, "src": "AAA", "dest": "BBB"},
            {"airline": 2, "src": "BBB", "dest": "CCC"}
        ],
        "airlines": [
            {"id": 1, "name": "X", "logo": "x.png"},
            {"id": 2, "name": "Y"}
        ],
        "airports": [
            {"code": "AAA", "name": "Alpha", "lat": 1.5, "long": -2.0},
            {"code": "BBB", "name": "Beta"},
            {"code": "CCC", "name": "Gamma"}
        ]
    }"#;

    #[test]
    fn test_parse_json_reads_all_collections() {
        let data = parse_json(SMALL_JSON).expect("small dataset parses");
        assert_eq!(data.routes.len(), 2);
        assert_eq!(data.airlines[0].logo.as_deref(), Some("x.png"));
        assert_eq!(data.airports[0].lat, Some(1.5));
        assert_eq!(data.routes[1].destination_airport_code, "CCC");
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_parse_json_rejects_malformed_routes() {
        let result = parse_json(r#"{"routes": [{"airline": "one"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_dataset_is_consistent() {
        let data = bundled().expect("bundled dataset parses");
        assert!(data.routes.len() > crate::model::PAGE_SIZE);
        assert!(!data.airlines.is_empty());
        assert!(!data.airports.is_empty());
        assert!(validate(&data).is_empty(), "{:?}", validate(&data));
    }

    #[test]
    fn test_read_csv_with_headers() {
        let csv = "airline,src,dest\n1, AAA ,BBB\n2,BBB,CCC\n";
        let routes: Vec<Route> = read_csv(csv.as_bytes()).expect("routes parse");
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].source_airport_code, "AAA");

        let airlines: Vec<Airline> = read_csv("id,name\n1,X\n".as_bytes()).expect("airlines parse");
        assert_eq!(airlines[0].logo, None);
    }

    #[test]
    fn test_read_csv_reports_bad_records() {
        let result: Result<Vec<Route>> = read_csv("airline,src,dest\nnot-a-number,AAA,BBB\n".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_directory_matches_json() {
        let dir = std::env::temp_dir().join(format!("routes-tui-csv-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(AIRLINES_CSV), "id,name,logo\n1,X,x.png\n2,Y,\n").unwrap();
        fs::write(dir.join(AIRPORTS_CSV), "code,name\nAAA,Alpha\nBBB,Beta\nCCC,Gamma\n").unwrap();
        fs::write(dir.join(ROUTES_CSV), "airline,src,dest\n1,AAA,BBB\n2,BBB,CCC\n").unwrap();

        let from_csv = load(&dir).expect("csv directory loads");
        fs::remove_dir_all(&dir).ok();

        let from_json = parse_json(SMALL_JSON).unwrap();
        assert_eq!(from_csv.routes, from_json.routes);
        assert_eq!(from_csv.airlines[0], from_json.airlines[0]);
        assert_eq!(from_csv.airports[1], from_json.airports[1]);
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let err = load("/nonexistent/routes.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/routes.json"));
    }

    #[test]
    fn test_validate_reports_unknown_references() {
        let data = Dataset::new(
            vec![Route {
                airline_id: 9,
                source_airport_code: "AAA".to_string(),
                destination_airport_code: "ZZZ".to_string(),
            }],
            vec![],
            vec![Airport {
                code: "AAA".to_string(),
                name: "Alpha".to_string(),
                lat: None,
                long: None,
            }],
        );
        let problems = validate(&data);
        assert_eq!(
            problems,
            vec![
                "route 0: unknown airline 9".to_string(),
                "route 0: unknown airport ZZZ".to_string(),
            ]
        );
    }
}
