#![cfg(test)]
use ipgen_common::config::{Config, OutputFormat};
use ipgen_core::input;
use ipgen_core::streamer::AddressStream;
use ipgen_core::writer;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

fn generate(ranges: &[&str], format: OutputFormat, cfg: &Config, path: &Path) -> u64 {
    let stream = AddressStream::new(ranges.iter().copied(), cfg);
    writer::write_output(stream, path, format, cfg).expect("generation failed")
}

fn lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn json_ips(path: &Path) -> Vec<String> {
    let raw = std::fs::read_to_string(path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = doc.as_object().expect("document is not an object");
    assert_eq!(object.len(), 1, "document should only hold the ips key");

    object["ips"]
        .as_array()
        .expect("ips is not an array")
        .iter()
        .map(|v| v.as_str().expect("address is not a string").to_string())
        .collect()
}

/// A /30 as plain text gives exactly its two hosts.
#[test]
fn cidr_block_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ips.txt");

    let total = generate(&["192.168.1.0/30"], OutputFormat::Txt, &Config::default(), &path);

    assert_eq!(total, 2);
    assert_eq!(lines(&path), vec!["192.168.1.1", "192.168.1.2"]);
}

#[test]
fn reversed_range_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ips.txt");
    let cfg = Config {
        count: true,
        ..Config::default()
    };

    let total = generate(&["10.0.0.5-10.0.0.3"], OutputFormat::Txt, &cfg, &path);

    assert_eq!(total, 0);
    assert!(lines(&path).is_empty());
}

#[test]
fn three_addresses_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ips.json");

    let total = generate(&["10.9.8.7-10.9.8.9"], OutputFormat::Json, &Config::default(), &path);

    assert_eq!(total, 3);
    assert_eq!(json_ips(&path), vec!["10.9.8.7", "10.9.8.8", "10.9.8.9"]);
}

#[test]
fn overlapping_ranges_with_and_without_unique() {
    let dir = tempfile::tempdir().unwrap();
    let ranges = ["10.0.0.0/30", "10.0.0.1-10.0.0.6"];

    let all = dir.path().join("all.txt");
    let total = generate(&ranges, OutputFormat::Txt, &Config::default(), &all);
    assert_eq!(total, 2 + 6);
    assert_eq!(lines(&all).len(), 8);

    let unique = dir.path().join("unique.json");
    let cfg = Config {
        unique: true,
        ..Config::default()
    };
    let total = generate(&ranges, OutputFormat::Json, &cfg, &unique);

    let ips = json_ips(&unique);
    let distinct: HashSet<&String> = ips.iter().collect();
    assert_eq!(total, 6);
    assert_eq!(ips.len(), distinct.len());
    assert_eq!(
        ips,
        vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
    );
}

#[test]
fn range_list_with_bad_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ips.txt");

    let list = "\
# edge routers
10.1.1.0/31

10.2.2.2/32
10.3.3.3-10.3.3.1
not-a-range
  172.16.0.254 - 172.16.1.1
";
    let ranges = input::parse_range_list(Cursor::new(list)).unwrap();
    let stream = AddressStream::new(ranges, &Config::default());
    let total = writer::write_output(stream, &path, OutputFormat::Txt, &Config::default()).unwrap();

    assert_eq!(total, 7);
    assert_eq!(
        lines(&path),
        vec![
            "10.1.1.0",
            "10.1.1.1",
            "10.2.2.2",
            "172.16.0.254",
            "172.16.0.255",
            "172.16.1.0",
            "172.16.1.1",
        ]
    );
}

#[test]
fn large_block_streams_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ips.txt");
    let cfg = Config {
        verbose: true,
        ..Config::default()
    };

    let total = generate(&["10.0.0.0/14"], OutputFormat::Txt, &cfg, &path);

    assert_eq!(total, (1 << 18) - 2);
    let written = lines(&path);
    assert_eq!(written.first().map(String::as_str), Some("10.0.0.1"));
    assert_eq!(written.last().map(String::as_str), Some("10.3.255.254"));
}
