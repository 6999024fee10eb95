// File: crates/arrival-gen/tests/generate_file.rs
// Purpose: End-to-end checks of generated record files: count, order, ranges, overwrite.

use arrival_gen::{
    generate_records, make_rng, read_records, write_records, GenError, GeneratorArgs, GeneratorConfig, Pairing,
    TimeRange,
};
use clap::Parser;

fn run(config: &GeneratorConfig) -> Vec<arrival_gen::Record> {
    let records = generate_records(config, &mut make_rng(config.seed));
    write_records(&config.output, &records).expect("write records");
    read_records(&config.output).expect("read records back")
}

fn config_in(dir: &tempfile::TempDir, customers: usize) -> GeneratorConfig {
    GeneratorConfig {
        customers,
        service: TimeRange::new("service time", 3, 8).unwrap(),
        enter: TimeRange::new("enter time", 10, 40).unwrap(),
        output: dir.path().join("test.txt"),
        ..GeneratorConfig::default()
    }
}

#[test]
fn file_has_one_line_per_customer() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(&dir, 57);
    run(&cfg);
    let text = std::fs::read_to_string(&cfg.output).unwrap();
    assert_eq!(text.lines().count(), 57);
    assert!(text.ends_with('\n'));
}

#[test]
fn enter_times_non_decreasing_and_in_range() {
    let dir = tempfile::tempdir().unwrap();
    for pairing in [Pairing::Independent, Pairing::Joint] {
        let cfg = GeneratorConfig { pairing, ..config_in(&dir, 300) };
        let records = run(&cfg);
        assert!(records.windows(2).all(|w| w[0].enter_time <= w[1].enter_time));
        assert!(records.iter().all(|r| cfg.enter.contains(r.enter_time)));
        assert!(records.iter().all(|r| cfg.service.contains(r.service_time)));
        assert!(records.iter().enumerate().all(|(i, r)| r.index == i));
    }
}

#[test]
fn fixed_ranges_produce_exact_lines() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("test.txt");
    let args = GeneratorArgs::try_parse_from([
        "generate-examples",
        "--ncustomer", "3",
        "--minentertime", "5", "--maxentertime", "5",
        "--minservtime", "2", "--maxservtime", "2",
        "--output", out.to_str().unwrap(),
    ])
    .unwrap();
    run(&args.into_config().unwrap());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "0 5 2\n1 5 2\n2 5 2\n");
}

#[test]
fn same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let a = GeneratorConfig { seed: Some(2024), output: dir.path().join("a.txt"), ..config_in(&dir, 40) };
    let b = GeneratorConfig { output: dir.path().join("b.txt"), ..a.clone() };
    run(&a);
    run(&b);
    assert_eq!(std::fs::read(&a.output).unwrap(), std::fs::read(&b.output).unwrap());
}

#[test]
fn second_run_replaces_first() {
    let dir = tempfile::tempdir().unwrap();
    let first = GeneratorConfig { seed: Some(1), ..config_in(&dir, 50) };
    run(&first);
    let second = GeneratorConfig { customers: 4, seed: Some(2), ..first.clone() };
    let expected = generate_records(&second, &mut make_rng(second.seed));
    let got = run(&second);
    assert_eq!(got, expected);
    assert_eq!(std::fs::read_to_string(&second.output).unwrap().lines().count(), 4);
}

#[test]
fn inverted_enter_range_fails_before_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("test.txt");
    std::fs::write(&out, "keep me\n").unwrap();
    let err = GeneratorArgs::try_parse_from([
        "generate-examples",
        "--minentertime", "10", "--maxentertime", "1",
        "--output", out.to_str().unwrap(),
    ])
    .unwrap()
    .into_config()
    .unwrap_err();
    assert!(matches!(err, GenError::InvertedRange { name: "enter time", .. }));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep me\n");
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = GeneratorConfig { output: dir.path().join("missing/dir/test.txt"), ..config_in(&dir, 2) };
    let records = generate_records(&cfg, &mut make_rng(Some(0)));
    let err = write_records(&cfg.output, &records).unwrap_err();
    assert!(matches!(err, GenError::Csv { .. }));
}
