use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HOST: &str = r#"{
  "attributes": {
    "machdep.cpu.brand_string": "Apple M1",
    "hw.packages": {"i32": 1},
    "hw.physicalcpu": {"i32": 8},
    "hw.physicalcpu_max": {"i32": 8},
    "hw.logicalcpu": {"i32": 8},
    "hw.logicalcpu_max": {"i32": 8},
    "hw.byteorder": {"i32": 1234},
    "hw.cputype": {"i32": 16777228},
    "hw.cpusubtype": {"i32": 2},
    "hw.nperflevels": {"i32": 2},
    "hw.perflevel0.name": "Performance",
    "hw.perflevel0.physicalcpu": {"i32": 4},
    "hw.perflevel0.l2cachesize": {"i32": 12582912},
    "hw.perflevel1.name": "Efficiency",
    "hw.perflevel1.physicalcpu": {"i32": 4},
    "hw.perflevel1.l2cachesize": {"i32": 4194304},
    "hw.memsize": {"i64": 8589934592},
    "hw.pagesize": {"i64": 16384},
    "kern.osrelease": "22.6.0",
    "kern.osproductversion": "13.5",
    "machdep.virtual_address_size": {"i32": 47}
  },
  "displays": [
    {"id": 1, "width": 2560, "height": 1600, "refresh_hz": 60.0,
     "vendor": 1552, "model": 41055, "serial": 0,
     "is_main": true, "is_builtin": true}
  ]
}"#;

fn fixture(body: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("host.json");
    fs::write(&path, body).unwrap();
    (dir, path)
}

fn hwinfo() -> Command {
    let mut cmd = Command::cargo_bin("hwinfo").unwrap();
    cmd.env("HWINFO_TEST_MODE", "1");
    cmd
}

#[test]
fn test_text_report_from_fixture() {
    let (_dir, path) = fixture(HOST);

    hwinfo()
        .arg("--fixture")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Processor:\n"))
        .stdout(predicate::str::contains("Apple M1"))
        .stdout(predicate::str::contains("Little Endian (1234)"))
        .stdout(predicate::str::contains("\tCore type 0 (Performance):\n"))
        .stdout(predicate::str::contains("\tCore type 1 (Efficiency):\n"))
        .stdout(predicate::str::contains("8589934592 bytes (8192 MB, 8 GB)"))
        .stdout(predicate::str::contains("0x0 - 0x7fffffffffff"))
        .stdout(predicate::str::contains("Display 1 (main, built-in):"))
        .stdout(predicate::str::contains("L3 cache").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_json_report_from_fixture() {
    let (_dir, path) = fixture(HOST);

    let output = hwinfo()
        .args(["--format", "json", "--section", "memory", "--fixture"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["memory"]["total"], 8_589_934_592u64);
    assert!(json["memory"]["l3_cache"].is_null());
    assert!(json.get("processor").is_none());
    assert!(json.get("displays").is_none());
}

#[test]
fn test_no_displays_flag() {
    let (_dir, path) = fixture(HOST);

    hwinfo()
        .arg("--no-displays")
        .arg("--fixture")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Displays:").not())
        .stdout(predicate::str::contains("OS:\n"));
}

#[test]
fn test_empty_fixture_still_succeeds() {
    let (_dir, path) = fixture("{}");

    hwinfo()
        .arg("--fixture")
        .arg(&path)
        .assert()
        .success()
        .stdout("Processor:\nMemory:\nOS:\n");
}

#[test]
fn test_malformed_fixture_exits_one() {
    let (_dir, path) = fixture(r#"{"attributes": {"hw.packages": {"i16": 1}}}"#);

    hwinfo()
        .arg("--fixture")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("❌ Error: Invalid fixture"))
        .stderr(predicate::str::contains("💡"));
}

#[test]
fn test_missing_fixture_exits_one() {
    let dir = TempDir::new().unwrap();

    hwinfo()
        .arg("--fixture")
        .arg(dir.path().join("nope.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_unknown_section_is_a_usage_error() {
    hwinfo()
        .args(["--section", "gpu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gpu"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_host_without_attribute_interface_warns() {
    hwinfo()
        .arg("--no-displays")
        .assert()
        .success()
        .stdout("Processor:\nMemory:\nOS:\n")
        .stderr(predicate::str::contains("exposes no hardware attributes"));
}
