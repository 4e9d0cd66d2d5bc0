use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const PCC_ENV: &[&str] = &[
    "PCC_CONFIG_FILE",
    "PCC_CONSOLE_URL",
    "PCC_PROJECT",
    "PCC_USERNAME",
    "PCC_PASSWORD",
    "PCC_SKIP_CERT_VERIFICATION",
    "PCC_FORMAT",
    "PCC_DEBUG",
];

/// pccop with a clean environment and a home directory without a config file.
fn pccop(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pccop"));
    for var in PCC_ENV {
        cmd.env_remove(var);
    }
    cmd.env("HOME", home);
    cmd
}

fn write_config(dir: &Path, console_url: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let contents = format!(
        r#"{{"console_url": "{console_url}", "username": "admin", "password": "hunter2"}}"#
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn mock_login(server: &mut mockito::Server) -> mockito::Mock {
    server
        .mock("POST", "/api/v1/authenticate")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"token": "t0k3n"}"#)
        .create()
}

#[test]
fn status_reports_setting_sources() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "https://console.example.com:8083");

    let assert = pccop(temp.path())
        .arg("status")
        .arg("--config-file")
        .arg(&config_path)
        .arg("--project")
        .arg("central")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("https://console.example.com:8083"));
    assert!(stdout.contains("(config file)"));
    assert!(stdout.contains("project: central"));
    assert!(!stdout.contains("hunter2"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_json_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = pccop(temp.path())
        .args(["status", "--format", "json"])
        .env("PCC_USERNAME", "from-env")
        .assert()
        .success();

    let parsed: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let settings = parsed["data"].as_array().expect("data array");
    let username = settings
        .iter()
        .find(|s| s["name"] == "username")
        .expect("username row");
    assert_eq!(username["value"], "from-env");
    assert_eq!(username["source"], "flag");

    Ok(())
}

#[test]
fn kinds_lists_every_kind() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    pccop(temp.path())
        .args(["kinds", "--format", "table"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("waas_container_policy")
                .and(predicate::str::contains("registry_settings"))
                .and(predicate::str::contains("collection")),
        );

    Ok(())
}

#[test]
fn missing_console_url_names_the_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    pccop(temp.path())
        .args(["get", "tag", "ops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--console-url").and(predicate::str::contains("PCC_CONSOLE_URL")));

    Ok(())
}

#[test]
fn explicit_missing_config_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let missing = temp.path().join("nope.json");

    pccop(temp.path())
        .arg("status")
        .arg("--config-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));

    Ok(())
}

#[test]
fn apply_rejects_bad_document_before_connecting() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let doc = temp.path().join("bad.yaml");
    fs::write(&doc, "kind: spaceship\nspec: {}\n")?;

    // Nothing listens here; a parse error must come first.
    let config_path = write_config(temp.path(), "http://127.0.0.1:59999");

    let assert = pccop(temp.path())
        .arg("apply")
        .arg("-f")
        .arg(&doc)
        .arg("--config-file")
        .arg(&config_path)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("spaceship"), "got: {stderr}");

    Ok(())
}

#[test]
fn connection_error_fails_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:59999");

    pccop(temp.path())
        .args(["get", "tag", "ops"])
        .arg("--config-file")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn apply_updates_existing_tag_with_project() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _login = mock_login(&mut server);

    let list = server
        .mock("GET", "/api/v1/tags")
        .match_query(mockito::Matcher::UrlEncoded(
            "project".into(),
            "central".into(),
        ))
        .match_header("authorization", "Bearer t0k3n")
        .with_status(200)
        .with_body(r#"[{"name": "ops", "description": "on call"}]"#)
        .expect_at_least(2)
        .create();
    let update = server
        .mock("PUT", "/api/v1/tags/ops")
        .match_query(mockito::Matcher::UrlEncoded(
            "project".into(),
            "central".into(),
        ))
        .with_status(200)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());
    let doc = temp.path().join("tags.yaml");
    fs::write(&doc, "kind: tag\nspec:\n  name: ops\n  description: on call\n")?;

    let assert = pccop(temp.path())
        .arg("apply")
        .arg("-f")
        .arg(&doc)
        .args(["--project", "central", "--config-file"])
        .arg(&config_path)
        .assert()
        .success();

    list.assert();
    update.assert();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("kind: tag"));
    assert!(stdout.contains("id: ops"));
    assert!(stdout.contains("on call"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn get_policy_prints_json_document() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _login = mock_login(&mut server);
    let _policy = server
        .mock("GET", "/api/v1/policies/admission")
        .with_status(200)
        .with_body(
            r#"{"_id": "admission", "policyType": "admission",
                "rules": [{"name": "no-latest", "effect": "block", "script": "true"}]}"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    let assert = pccop(temp.path())
        .args(["get", "admission_policy", "admission", "--format", "json"])
        .arg("--config-file")
        .arg(&config_path)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(doc["kind"], "admission_policy");
    assert_eq!(doc["id"], "admission");
    assert_eq!(doc["spec"]["rule"][0]["name"], "no-latest");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn server_error_reports_status_and_step() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _login = mock_login(&mut server);
    let _tags = server
        .mock("GET", "/api/v1/tags")
        .with_status(500)
        .with_body("boom")
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pccop(temp.path())
        .args(["get", "tag", "ops", "--config-file"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("tag: read failed")
                .and(predicate::str::contains("Non-OK status: 500")),
        );

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn delete_with_yes_skips_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _login = mock_login(&mut server);
    let delete = server
        .mock("DELETE", "/api/v1/tags/ops")
        .with_status(200)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    pccop(temp.path())
        .args(["delete", "tag", "ops", "--yes", "--config-file"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted tag: ops"));

    delete.assert();
    Ok(())
}
