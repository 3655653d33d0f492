use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_subtrack"))
}

/// Isolated config/data/working directories for one test.
struct Sandbox {
    base: PathBuf,
}

impl Sandbox {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!("st_{}_{}_{}", prefix, std::process::id(), nanos));
        for dir in ["config", "data", "work"] {
            std::fs::create_dir_all(base.join(dir)).expect("create sandbox dir");
        }
        Self { base }
    }

    fn config_home(&self) -> PathBuf {
        self.base.join("config")
    }

    fn data_dir(&self) -> PathBuf {
        self.base.join("data").join("subtrack")
    }

    fn work_dir(&self) -> PathBuf {
        self.base.join("work")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.work_dir())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.base.join("data"))
            .env("SUBTRACK_TODAY", "2024-03-01")
            .env("NO_COLOR", "1")
            .env_remove("SUBTRACK_DATA_DIR")
            .env_remove("SUBTRACK_CONFIG")
            .env_remove("SUBTRACK_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run subtrack")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "subtrack {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn json(&self, args: &[&str]) -> Value {
        serde_json::from_str(&self.run_ok(args)).expect("valid JSON output")
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stored_file(sandbox: &Sandbox) -> PathBuf {
    sandbox.data_dir().join("subtrackr-subscriptions.json")
}

fn plain_field<'a>(output: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{}=", key);
    output
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|s| s["id"].as_str().expect("id").to_string())
        .collect()
}

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-9)
        .unwrap_or(false)
}

fn add_figma(sandbox: &Sandbox) -> String {
    let out = sandbox.run_ok(&[
        "add",
        "--name",
        "Figma",
        "--category",
        "Software",
        "--price",
        "15",
        "--cycle",
        "monthly",
        "--start",
        "2024-01-31",
        "--card-type",
        "Visa",
        "--card-last-four",
        "4242",
    ]);
    assert_eq!(out.lines().next(), Some("status=ok"));
    plain_field(&out, "id").expect("id in receipt").to_string()
}

#[test]
fn test_first_run_lists_sample_data_without_writing() {
    let sandbox = Sandbox::new("seed");
    let list = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&list), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert_eq!(list[0]["name"], "Netflix Premium");
    assert_eq!(list[0]["nextRenewal"], "2024-03-15");
    assert_eq!(list[2]["nextRenewal"], Value::Null);
    assert!(!stored_file(&sandbox).exists());
}

#[test]
fn test_add_persists_and_appears_in_list_and_show() {
    let sandbox = Sandbox::new("add");
    let id = add_figma(&sandbox);
    assert!(stored_file(&sandbox).exists());

    let list = sandbox.json(&["list", "--json"]);
    let listed = ids(&list);
    assert_eq!(listed.len(), 9);
    assert_eq!(listed.last(), Some(&id));

    let shown = sandbox.json(&["show", &id, "--json"]);
    assert_eq!(shown["name"], "Figma");
    assert_eq!(shown["category"], "Software");
    assert_eq!(shown["billingCycle"], "monthly");
    assert_eq!(shown["startDate"], "2024-01-31");
    assert_eq!(shown["paymentCardLastFour"], "4242");
    assert!(approx(&shown["price"], 15.0));
    // Jan 31 clamps to Feb 29 and the next step continues from the 29th.
    assert_eq!(shown["nextRenewal"], "2024-03-29");
}

#[test]
fn test_stats_for_sample_data() {
    let sandbox = Sandbox::new("stats");
    let stats = sandbox.json(&["stats", "--json"]);
    assert_eq!(stats["total"], 8);
    assert_eq!(stats["active"], 6);
    assert!(approx(&stats["monthlyCost"], 111.89));
    assert!(approx(&stats["yearlyCost"], 1342.63));
    assert_eq!(stats["mostFrequentCategory"], "Streaming");

    let streaming = sandbox.json(&["stats", "--json", "--category", "Streaming"]);
    assert_eq!(streaming["total"], 2);
    assert!(approx(&streaming["monthlyCost"], 36.98));
}

#[test]
fn test_chart_groups_active_subscriptions_by_category() {
    let sandbox = Sandbox::new("chart");
    let chart = sandbox.json(&["chart", "--json"]);
    let bars = chart.as_array().expect("array");
    let streaming = bars
        .iter()
        .find(|bar| bar["category"] == "Streaming")
        .expect("streaming bar");
    assert!(approx(&streaming["total"], 36.98));
    assert!(bars.iter().all(|bar| bar["category"] != "Education"));

    let out = sandbox.run_ok(&["chart", "--status", "cancelled"]);
    assert!(out.contains("No active subscriptions to chart."));
}

#[test]
fn test_edit_keeps_id_and_position() {
    let sandbox = Sandbox::new("edit");
    sandbox.run_ok(&["edit", "4", "--price", "45", "--status", "paused"]);

    let list = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&list), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert_eq!(list[3]["name"], "Gym Membership");
    assert_eq!(list[3]["status"], "paused");
    assert!(approx(&list[3]["price"], 45.0));
}

#[test]
fn test_edit_clear_card_drops_card_fields() {
    let sandbox = Sandbox::new("clear");
    sandbox.run_ok(&["edit", "1", "--clear-card"]);
    let shown = sandbox.json(&["show", "1", "--json"]);
    assert!(shown.get("paymentCardType").map_or(true, Value::is_null));
    assert!(shown.get("paymentCardLastFour").map_or(true, Value::is_null));
}

#[test]
fn test_remove_with_yes() {
    let sandbox = Sandbox::new("remove");
    let out = sandbox.run_ok(&["remove", "3", "--yes"]);
    assert_eq!(plain_field(&out, "id"), Some("3"));

    let list = sandbox.json(&["list", "--json"]);
    assert_eq!(ids(&list), vec!["1", "2", "4", "5", "6", "7", "8"]);
}

#[test]
fn test_remove_without_confirmation_is_refused_when_not_interactive() {
    let sandbox = Sandbox::new("refuse");
    let output = sandbox.run(&["remove", "3"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--yes"));
    assert_eq!(ids(&sandbox.json(&["list", "--json"])).len(), 8);
}

#[test]
fn test_unknown_id_exits_not_found() {
    let sandbox = Sandbox::new("missing");
    for args in [
        vec!["show", "does-not-exist"],
        vec!["edit", "does-not-exist", "--price", "1"],
        vec!["remove", "does-not-exist", "--yes"],
    ] {
        let output = sandbox.run(&args);
        assert_eq!(output.status.code(), Some(3), "{:?}", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("error=Subscription does-not-exist not found"));
        assert!(stderr.contains("hint=Run `subtrack list`"));
    }
}

#[test]
fn test_invalid_input_exits_with_code_4() {
    let sandbox = Sandbox::new("invalid");
    let base = |name: &'static str, price: &'static str| {
        vec![
            "add", "--name", name, "--category", "Gaming", "--price", price, "--cycle",
            "monthly", "--start", "2024-01-01",
        ]
    };

    let output = sandbox.run(&base("Steam", "abc"));
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&base("S", "9.99"));
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&base("Steam", "7000000000000000000000000000"));
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&base("Steam", "12.345678901234567890123"));
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&["list", "--category", "Groceries"]);
    assert_eq!(output.status.code(), Some(4));

    assert!(!stored_file(&sandbox).exists());
}

#[test]
fn test_filters_narrow_the_list() {
    let sandbox = Sandbox::new("filter");
    let paused = sandbox.json(&["list", "--json", "--status", "paused"]);
    assert_eq!(ids(&paused), vec!["6"]);

    let streaming = sandbox.json(&["list", "--json", "--category", "streaming", "--status", "all"]);
    assert_eq!(ids(&streaming), vec!["1", "2"]);
}

#[test]
fn test_plain_list_rows() {
    let sandbox = Sandbox::new("plain");
    let out = sandbox.run_ok(&["list", "--category", "Gaming"]);
    let line = out.lines().find(|l| l.starts_with("id=8")).expect("row for id 8");
    assert!(line.contains("name=\"Xbox Game Pass Ultimate\""));
    assert!(line.contains("start=\"Jul 1, 2023\""));
    assert!(line.contains("next_renewal=\"Apr 1, 2024\""));
    assert!(line.contains("card=N/A"));
}

#[test]
fn test_as_of_flag_overrides_today() {
    let sandbox = Sandbox::new("asof");
    let shown = sandbox.json(&["--as-of", "2024-06-01", "show", "5", "--json"]);
    assert_eq!(shown["nextRenewal"], "2025-02-10");
}

#[test]
fn test_export_to_stdout_is_csv() {
    let sandbox = Sandbox::new("csvout");
    let out = sandbox.run_ok(&["export", "--stdout", "--category", "Streaming"]);

    let mut reader = csv::Reader::from_reader(out.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(&headers[0], "ID");
    assert_eq!(&headers[7], "Upcoming Renewal Date");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "Netflix Premium");
    assert_eq!(&rows[0][3], "19.99");
    assert_eq!(&rows[0][7], "2024-03-15");
}

#[test]
fn test_export_writes_default_file() {
    let sandbox = Sandbox::new("csvfile");
    let out = sandbox.run_ok(&["export"]);
    assert_eq!(plain_field(&out, "rows"), Some("8"));

    let path = sandbox.work_dir().join("subscriptions_export.csv");
    let contents = std::fs::read_to_string(&path).expect("export file");
    assert_eq!(contents.lines().count(), 9);
}

#[test]
fn test_export_of_empty_view_writes_nothing() {
    let sandbox = Sandbox::new("csvnone");
    let target = sandbox.work_dir().join("out.csv");
    let output = sandbox
        .command()
        .args(["export", "--status", "paused", "--category", "Gaming", "-o"])
        .arg(&target)
        .output()
        .expect("run subtrack");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No subscriptions to export."));
    assert!(!target.exists());
}

#[test]
fn test_corrupt_collection_falls_back_with_warning() {
    let sandbox = Sandbox::new("corrupt");
    std::fs::create_dir_all(sandbox.data_dir()).expect("data dir");
    std::fs::write(stored_file(&sandbox), "{not json").expect("write corrupt file");

    let output = sandbox.run(&["list", "--json"]);
    assert!(output.status.success());
    let list: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(ids(&list).len(), 8);
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be read"));
}

fn config_path(sandbox: &Sandbox) -> PathBuf {
    sandbox.config_home().join("subtrack").join("config.toml")
}

fn read_config(path: &Path) -> String {
    std::fs::read_to_string(path).expect("config file")
}

#[test]
fn test_init_writes_config_and_refuses_overwrite() {
    let sandbox = Sandbox::new("init");
    sandbox.run_ok(&["init", "--currency", "€"]);
    let config = read_config(&config_path(&sandbox));
    assert!(config.contains("currency = \"€\""));
    assert!(config.contains("data_dir"));
    assert!(sandbox.data_dir().exists());

    let output = sandbox.run(&["init"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

    sandbox.run_ok(&["init", "--force"]);
    assert!(!read_config(&config_path(&sandbox)).contains("€"));
}

#[test]
fn test_configured_currency_is_used_for_amounts() {
    let sandbox = Sandbox::new("currency");
    sandbox.run_ok(&["init", "--currency", "€"]);
    let out = sandbox.run_ok(&["list", "--category", "Health"]);
    assert!(out.contains("price=€40.00"));
}

#[test]
fn test_data_dir_flag_overrides_config() {
    let sandbox = Sandbox::new("datadir");
    let custom = sandbox.base.join("elsewhere");
    let output = sandbox
        .command()
        .arg("--data-dir")
        .arg(&custom)
        .args(["remove", "8", "--yes"])
        .output()
        .expect("run subtrack");
    assert!(output.status.success());
    assert!(custom.join("subtrackr-subscriptions.json").exists());
    assert!(!stored_file(&sandbox).exists());
}

#[test]
fn test_no_command_prints_quickstart() {
    let sandbox = Sandbox::new("bare");
    let out = sandbox.run_ok(&[]);
    assert!(out.starts_with("SubTrack v"));
    assert!(out.contains("Quickstart:"));
    assert!(out.contains("subtrack list"));
}
