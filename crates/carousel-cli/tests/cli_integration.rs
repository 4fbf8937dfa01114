use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn carousel() -> Command {
    let mut cmd = Command::cargo_bin("carousel").unwrap();
    cmd.env_remove("CAROUSEL_FILE")
        .env_remove("CAROUSEL_CONFIG")
        .env_remove("CAROUSEL_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn write_products(dir: &Path, count: u64) -> String {
    let products: Vec<Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("Product {}", i),
                "description": "A product",
                "images": [format!("https://cdn.example.com/{}.png", i)]
            })
        })
        .collect();
    let path = dir.join("products.json");
    fs::write(
        &path,
        serde_json::json!({ "products": products, "total": count }).to_string(),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

mod inspect_tests {
    use super::*;

    #[test]
    fn test_inspect_desktop_layout() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 5);

        let output = carousel()
            .args([
                "inspect",
                "--file",
                &file,
                "--viewport-width",
                "1280",
                "--container-width",
                "1032",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        let data = &json["data"];
        assert_eq!(data["breakpoint"], "desktop");
        assert_eq!(data["visible_count"], 3);
        assert_eq!(data["can_navigate"], true);
        assert_eq!(data["clone_count"], 3);
        assert_eq!(
            data["display"],
            serde_json::json!([3, 4, 5, 1, 2, 3, 4, 5, 1, 2, 3])
        );
        assert_eq!(data["initial"]["display_index"], 3);
        assert_eq!(data["active_dot"], 0);
    }

    #[test]
    fn test_inspect_few_cards_is_static() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 2);

        let output = carousel()
            .args(["inspect", "--file", &file, "--viewport-width", "1280"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["can_navigate"], false);
        assert_eq!(json["data"]["display"], serde_json::json!([1, 2]));
        assert_eq!(json["data"]["initial"]["display_index"], 0);
    }

    #[test]
    fn test_inspect_missing_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("missing.json");

        carousel()
            .args([
                "inspect",
                "--file",
                file.to_str().unwrap(),
                "--viewport-width",
                "1280",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("\"success\":false"))
            .stderr(predicate::str::contains("Not found"));
    }

    #[test]
    fn test_inspect_invalid_json_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "{ not json").unwrap();

        carousel()
            .args([
                "inspect",
                "--file",
                file.to_str().unwrap(),
                "--viewport-width",
                "1280",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Serialization error"));
    }
}

mod simulate_tests {
    use super::*;

    fn simulate(file: &str, extra: &[&str]) -> Value {
        let output = carousel()
            .args([
                "simulate",
                "--file",
                file,
                "--viewport-width",
                "1280",
                "--container-width",
                "1032",
            ])
            .args(extra)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        parse_json_output(&output)
    }

    #[test]
    fn test_simulate_wraps_backwards() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);

        let json = simulate(&file, &["prev"]);
        let step = &json["data"]["steps"][0];
        assert_eq!(step["step"], "prev");
        assert_eq!(step["accepted"], true);
        assert_eq!(step["moves"].as_array().unwrap().len(), 2);
        assert_eq!(step["moves"][1]["mode"], "instant");
        assert_eq!(step["state"]["display_index"], 12);
        assert_eq!(step["active_dot"], 9);
    }

    #[test]
    fn test_simulate_mixed_steps() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);

        let json = simulate(&file, &["next", "dot:6", "drag:-80:-600", "resize:600:560"]);
        let steps = json["data"]["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0]["active_dot"], 1);
        assert_eq!(steps[1]["active_dot"], 6);
        assert_eq!(steps[2]["active_dot"], 7);
        // Mobile has one slot: rebuilt back to the first card.
        assert_eq!(steps[3]["state"]["display_index"], 1);
        assert_eq!(steps[3]["active_dot"], 0);
    }

    #[test]
    fn test_simulate_same_dot_ignore() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);

        let json = simulate(&file, &["--same-dot", "ignore", "dot:0"]);
        assert_eq!(json["data"]["steps"][0]["accepted"], false);
    }

    #[test]
    fn test_simulate_rejects_unknown_step() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);

        carousel()
            .args([
                "simulate",
                "--file",
                &file,
                "--viewport-width",
                "1280",
                "teleport",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown step"));
    }

    #[test]
    fn test_simulate_uses_config_file() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);
        let config = dir.path().join("config.toml");
        fs::write(&config, "[navigation]\nsame_dot_policy = \"ignore\"\n").unwrap();

        let output = carousel()
            .args([
                "--config",
                config.to_str().unwrap(),
                "simulate",
                "--file",
                &file,
                "--viewport-width",
                "1280",
                "dot:0",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["steps"][0]["accepted"], false);
    }

    #[test]
    fn test_invalid_config_file_fails() {
        let dir = tempdir().unwrap();
        let file = write_products(dir.path(), 10);
        let config = dir.path().join("config.toml");
        fs::write(&config, "[navigation]\nsame_dot_policy = \"sometimes\"\n").unwrap();

        carousel()
            .args([
                "--config",
                config.to_str().unwrap(),
                "simulate",
                "--file",
                &file,
                "--viewport-width",
                "1280",
                "next",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("\"success\":false"));
    }
}

#[test]
fn test_completions() {
    carousel()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel"));
}

#[test]
fn test_version() {
    carousel()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
