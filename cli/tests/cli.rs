//! End-to-end tests for the pageproof binary

use assert_cmd::Command;
use predicates::prelude::*;

fn pageproof() -> Command {
    Command::cargo_bin("pageproof").expect("binary builds")
}

#[test]
fn routes_lists_every_page() {
    pageproof()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/app/onboarding/complete"))
        .stdout(predicate::str::contains("/app/settings/billing/history"))
        .stdout(predicate::str::contains("/demo/success"))
        .stdout(predicate::str::contains("/start/success"));
}

#[test]
fn show_demo_success_prints_heading_and_pricing_link() {
    pageproof()
        .arg("/demo/success")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo Request Received"))
        .stdout(predicate::str::contains("Pricing"))
        .stdout(predicate::str::contains("/pricing"));
}

#[test]
fn show_start_success_prints_resources_link() {
    pageproof()
        .arg("/start/success")
        .assert()
        .success()
        .stdout(predicate::str::contains("Account Creation Started"))
        .stdout(predicate::str::contains("/resources"));
}

#[test]
fn show_unknown_route_fails() {
    pageproof()
        .arg("/does/not/exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_json_outputs_structured_content() {
    pageproof()
        .args(["/start/success", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Account Creation Started\""))
        .stdout(predicate::str::contains("\"/resources\""));
}

#[test]
fn route_and_subcommand_together_fail() {
    pageproof()
        .args(["/demo/success", "routes"])
        .assert()
        .failure();
}
