use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn wp_deploy() -> Command {
    let mut cmd = Command::cargo_bin("wp-deploy").expect("Binary exists");
    cmd.env_remove("WP_URL")
        .env_remove("WP_USERNAME")
        .env_remove("WP_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_credentials_exit_with_code_one() {
    wp_deploy()
        .arg("articles/hello.md")
        .env("WP_URL", "https://blog.example.com")
        .env("WP_USERNAME", "deploy-bot")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("WP_PASSWORD"));
}

#[test]
fn test_no_files_is_a_successful_no_op() {
    wp_deploy()
        .env("WP_URL", "http://127.0.0.1:1")
        .env("WP_USERNAME", "deploy-bot")
        .env("WP_PASSWORD", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to deploy"));
}

#[test]
fn test_per_file_failure_still_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("articles")).unwrap();
    std::fs::write(temp_dir.path().join("articles/hello.md"), "# Hello\n\nWorld").unwrap();

    let server = MockServer::start();
    let lookup = server.mock(|when, then| {
        when.method(GET).path("/wp-json/wp/v2/posts");
        then.status(403).body(r#"{"code":"rest_forbidden"}"#);
    });

    wp_deploy()
        .arg("--root")
        .arg(temp_dir.path())
        .arg("articles/hello.md images/logo.png README.md")
        .env("WP_URL", server.base_url())
        .env("WP_USERNAME", "deploy-bot")
        .env("WP_PASSWORD", "secret")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error processing articles/hello.md"))
        .stdout(predicate::str::contains("Image upload not implemented yet"))
        .stdout(predicate::str::contains("Skipping: README.md"));

    lookup.assert();
}
