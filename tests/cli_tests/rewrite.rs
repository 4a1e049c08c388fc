// SPDX-License-Identifier: Apache-2.0

use crate::Checkout;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn removes_stable_version() {
    let checkout = Checkout::new();
    let manifest = checkout.manifest(
        "mylib.1.0/package.json",
        r#"{"name":"mylib","stableVersion":"1.0.0","version":"2.0.0-dev"}"#,
    );

    checkout
        .pruner()
        .arg("mylib.1.0.0")
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert_eq!(
        fs::read_to_string(manifest).unwrap(),
        "{\n    \"name\": \"mylib\",\n    \"version\": \"2.0.0-dev\"\n}"
    );
}

#[test]
fn keeps_everything_else_in_order() {
    let checkout = Checkout::new();
    let manifest = checkout.manifest(
        "excubiae/package.json",
        r#"{
  "name": "@excubiae/contracts",
  "version": "0.2.0",
  "stableVersion": "0.1.0",
  "license": "MIT",
  "files": ["contracts/**/*.sol", "!contracts/test/*"],
  "scripts": {"compile": "hardhat compile", "test": "hardhat test"},
  "publishConfig": {"access": "public"},
  "private": false
}"#,
    );

    checkout.pruner().arg("excubiae").assert().success();

    assert_eq!(
        fs::read_to_string(manifest).unwrap(),
        r#"{
    "name": "@excubiae/contracts",
    "version": "0.2.0",
    "license": "MIT",
    "files": [
        "contracts/**/*.sol",
        "!contracts/test/*"
    ],
    "scripts": {
        "compile": "hardhat compile",
        "test": "hardhat test"
    },
    "publishConfig": {
        "access": "public"
    },
    "private": false
}"#
    );
}

#[test]
fn absent_field_only_reformats() {
    let checkout = Checkout::new();
    let manifest = checkout.manifest(
        "mylib.1.0/package.json",
        "{\"name\":\"mylib\",\"dependencies\":{\"ethers\":\"^6.13.0\"}}\n",
    );

    checkout.pruner().arg("mylib.1.0.0").assert().success();

    assert_eq!(
        fs::read_to_string(manifest).unwrap(),
        "{\n    \"name\": \"mylib\",\n    \"dependencies\": {\n        \"ethers\": \"^6.13.0\"\n    }\n}"
    );
}

#[test]
fn running_twice_is_the_same_as_once() {
    let checkout = Checkout::new();
    let manifest = checkout.manifest(
        "mylib.1.0/package.json",
        r#"{"name":"mylib","stableVersion":"1.0.0","version":"2.0.0-dev","keywords":[]}"#,
    );

    checkout.pruner().arg("mylib.1.0.0").assert().success();
    let once = fs::read_to_string(&manifest).unwrap();

    checkout.pruner().arg("mylib.1.0.0").assert().success();
    let twice = fs::read_to_string(&manifest).unwrap();

    assert_eq!(once, twice);
    assert!(!twice.contains("stableVersion"));
}

#[test]
fn verbose_run_logs_to_stderr() {
    let checkout = Checkout::new();
    checkout.manifest(
        "mylib.1.0/package.json",
        r#"{"name":"mylib","stableVersion":"1.0.0"}"#,
    );

    let output = checkout
        .pruner()
        .args(["-v", "mylib.1.0.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("removed field"));
}
