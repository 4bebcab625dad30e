use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const CONTAINERS: &str = "\
C1,0,0,Paper,10,Square,Main,1,0
C2,0,0,Paper,20,,Main,1,1
C3,5,5,Biodegradable waste,5,,Side,2,0
C4,5,5,Textile,300,,Side,2,1
C5,9,9,Clear glass,150.9,,Hill,7,1
";

const PATHS: &str = "\
C1,C3,2.5
C5,C3,4
C2,C5,1
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn binnet(args: &[&str], containers: &str, paths: &str) -> Output {
    let containers = write_temp(containers);
    let paths = write_temp(paths);
    Command::new(env!("CARGO_BIN_EXE_binnet"))
        .args(args)
        .arg(containers.path())
        .arg(paths.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unfiltered_listing() {
    let output = binnet(&[], CONTAINERS, PATHS);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "ID: C1, Type: Paper, Capacity: 10, Address: Main, Neighbors: C3"
    );
    assert_eq!(
        lines[2],
        "ID: C3, Type: Biodegradable waste, Capacity: 5, Address: Side, Neighbors: C1 C5"
    );
}

#[test]
fn test_type_filter() {
    let output = binnet(&["-t", "P"], CONTAINERS, PATHS);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID: C1,"));
    assert!(lines[1].starts_with("ID: C2,"));
    assert!(lines[1].ends_with("Neighbors: C5"));
}

#[test]
fn test_capacity_and_public_filters() {
    let output = binnet(&["-c", "100-200", "-p", "Y"], CONTAINERS, PATHS);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ID: C5, Type: Clear glass, Capacity: 150.9,"));

    let output = binnet(&["-p", "N"], CONTAINERS, PATHS);
    let ids: Vec<String> = stdout_lines(&output)
        .iter()
        .map(|line| line.split(',').next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["ID: C1", "ID: C3"]);
}

#[test]
fn test_station_listing() {
    let output = binnet(&["-s"], CONTAINERS, PATHS);
    assert!(output.status.success());
    // C2-C5 is missed: C2 did not found station 1.
    assert_eq!(stdout_lines(&output), vec!["1;P;2", "2;BT;1,3", "3;G;2"]);
}

#[test]
fn test_station_listing_any_member() {
    let output = binnet(&["-s", "--link-members"], CONTAINERS, PATHS);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["1;P;2,3", "2;BT;1,3", "3;G;1,2"]);
}

#[test]
fn test_describe() {
    let output = binnet(&["--describe", "C1"], CONTAINERS, PATHS);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Name: Square"));
    assert!(text.contains("Is Public: No"));

    let output = binnet(&["--describe", "C42"], CONTAINERS, PATHS);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let output = binnet(&[], "C1,0,0,Paper,10,,,,0\nC2,0,0\n", PATHS);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 9 fields, found 3"));
}

#[test]
fn test_unknown_waste_code_fails() {
    let output = binnet(&["-t", "PX"], CONTAINERS, PATHS);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_filters_rejected_in_station_and_describe_modes() {
    let rejected: [&[&str]; 4] = [
        &["-s", "-t", "P"],
        &["-s", "-c", "1-5"],
        &["-s", "-p", "Y"],
        &["--describe", "C1", "-t", "P"],
    ];
    for args in rejected {
        let output = binnet(args, CONTAINERS, PATHS);
        assert!(!output.status.success(), "{args:?} should be rejected");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_negative_capacity_bound() {
    let output = binnet(&["--capacity=-5-10"], CONTAINERS, PATHS);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID: C1,"));
    assert!(lines[1].starts_with("ID: C3,"));
}

#[test]
fn test_delimiter_must_be_one_ascii_character() {
    let output = binnet(&["-d", ";;"], CONTAINERS, PATHS);
    assert!(!output.status.success());

    let containers = CONTAINERS.replace(',', ";");
    let paths = PATHS.replace(',', ";");
    let output = binnet(&["-d", ";", "-t", "G"], &containers, &paths);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["ID: C5, Type: Clear glass, Capacity: 150.9, Address: Hill, Neighbors: C3 C2"]
    );
}
