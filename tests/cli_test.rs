use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_generate_csv() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("cardgen"));
    cmd.args(["generate", "--count", "5", "--seed", "42"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let mut reader = csv::Reader::from_reader(output.as_slice());
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    assert_eq!(
        headers,
        ["network", "number", "cvv", "expiry_month", "expiry_year", "bin"]
    );

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let number = &record[1];
        assert_eq!(number.len(), 16);
        assert!(cardgen::is_valid(number)?);
        assert_eq!(&record[5], &number[..6]);
        rows += 1;
    }
    assert_eq!(rows, 5);

    Ok(())
}

#[test]
fn test_cli_generate_is_reproducible_with_seed() {
    let run = || {
        Command::new(cargo_bin!("cardgen"))
            .args(["generate", "--count", "3", "--seed", "9"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cli_generate_forced_network_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("cardgen"));
    cmd.args([
        "generate",
        "--count",
        "4",
        "--network",
        "mastercard",
        "--format",
        "json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let cards: Vec<serde_json::Value> = serde_json::from_slice(&output)?;
    assert_eq!(cards.len(), 4);
    for card in cards {
        assert_eq!(card["network"], "mastercard");
        let number = card["number"].as_str().unwrap();
        assert!(["51", "52", "53", "54", "55", "22"].iter().any(|p| number.starts_with(p)));
    }

    Ok(())
}

#[test]
fn test_cli_validate() {
    Command::new(cargo_bin!("cardgen"))
        .args(["validate", "4532015112830366"])
        .assert()
        .success()
        .stdout(predicate::str::diff("valid\n"));

    Command::new(cargo_bin!("cardgen"))
        .args(["validate", "4532015112830367"])
        .assert()
        .success()
        .stdout(predicate::str::diff("invalid\n"));
}

#[test]
fn test_cli_check_digit_and_format() {
    Command::new(cargo_bin!("cardgen"))
        .args(["check-digit", "453201511283036"])
        .assert()
        .success()
        .stdout(predicate::str::diff("6\n"));

    Command::new(cargo_bin!("cardgen"))
        .args(["format", "4532015112830366"])
        .assert()
        .success()
        .stdout(predicate::str::diff("4532 0151 1283 0366\n"));
}

#[test]
fn test_cli_networks() {
    Command::new(cargo_bin!("cardgen"))
        .arg("networks")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag,display_name,bin_prefixes"))
        .stdout(predicate::str::contains("mastercard,💳 MasterCard,51|52|53|54|55|22"))
        .stdout(predicate::str::contains("mir2,💳 МИР-2,220"));
}
