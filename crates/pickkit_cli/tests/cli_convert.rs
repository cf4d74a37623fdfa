//! End-to-end tests for `pickkit convert`.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const C_ORDERS_TSV: &str = "order-id\trecipient-name\tsku\tquantity-purchased\tship-state\n\
    111-0000001\tAnn\tCO129-BLU-M\t5\tTX\n\
    111-0000002\tBo\tMK3514-RED-2X\t3\tMA\n\
    111-0000003\tCy\tABC-GRN-S\t2\tIL\n";

fn write_input(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_help_lists_convert() {
    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_convert_writes_dated_workbook() {
    let tmp = TempDir::new().unwrap();
    let path_in = write_input(tmp.path(), "orders.txt", C_ORDERS_TSV);
    let dir_out = tmp.path().join("out");

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(&dir_out)
        .args(["--date", "2024-03-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20240307 - Amazon Order Report.xlsx"))
        .stdout(predicate::str::contains("[PICK] records=3"));

    let path_out = dir_out.join("20240307 - Amazon Order Report.xlsx");
    assert!(path_out.is_file());
    assert!(fs::metadata(&path_out).unwrap().len() > 0);
}

#[test]
fn test_convert_json_contains_three_views() {
    let tmp = TempDir::new().unwrap();
    let path_in = write_input(tmp.path(), "orders.txt", C_ORDERS_TSV);

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(tmp.path())
        .args(["--date", "2024-03-07", "--format", "json"])
        .assert()
        .success();

    let text = fs::read_to_string(tmp.path().join("20240307 - Amazon Order Report.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(doc["report_date"], "20240307");
    assert_eq!(doc["order_view"]["total"]["quantity_sum"], 10);
    assert_eq!(doc["pick_view"]["total"]["quantity_sum"], 10);

    let l_kinds: Vec<&str> = doc["pick_view"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["kind"].as_str().unwrap())
        .collect();
    assert_eq!(l_kinds, ["item", "separator", "item", "separator", "item"]);

    let l_styles: Vec<&str> = doc["canonical_view"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["style"].as_str().unwrap())
        .collect();
    assert_eq!(l_styles, ["ABC", "CO129Y", "MK3514PL"]);
    assert_eq!(doc["report"]["cnt_style_exception"], 1);
}

#[test]
fn test_missing_sku_column_fails_with_column_name() {
    let tmp = TempDir::new().unwrap();
    let path_in = write_input(
        tmp.path(),
        "orders.csv",
        "order-id,recipient-name,quantity-purchased\nA,B,1\n",
    );

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required column is missing: \"sku\""));
}

#[test]
fn test_alias_table_override_and_duplicate_rejection() {
    let tmp = TempDir::new().unwrap();
    let path_in = write_input(tmp.path(), "orders.txt", C_ORDERS_TSV);
    let path_table = write_input(
        tmp.path(),
        "aliases.toml",
        "style_aliases = [[\"ABC\", \"ABC1\"], [\"ABC\", \"ABC2\"]]\n",
    );

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(tmp.path())
        .arg("--alias-table")
        .arg(&path_table)
        .args(["--date", "2024-03-07", "--format", "json"])
        .assert()
        .success();
    let text = fs::read_to_string(tmp.path().join("20240307 - Amazon Order Report.json")).unwrap();
    assert!(text.contains("\"ABC2\""));
    assert!(!text.contains("\"ABC1\""));

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(tmp.path())
        .arg("--alias-table")
        .arg(&path_table)
        .arg("--reject-duplicate-keys")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load alias table"));
}

#[test]
fn test_oversized_quantity_fails_without_crashing() {
    let tmp = TempDir::new().unwrap();
    let path_in = write_input(
        tmp.path(),
        "orders.csv",
        "order-id,sku,quantity-purchased\nA,CO129-BLK-M,18446744073709551615\nB,CO129-BLK-M,1\n",
    );

    Command::cargo_bin("pickkit")
        .unwrap()
        .arg("convert")
        .arg(&path_in)
        .arg("--output-dir")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid quantity at data row 1"));
}
