mod common;

use std::fs;

use common::{fresh_home, script_cli, young_household};
use predicates::prelude::*;
use predicates::str::contains;

const BUILD_YOUNG_HOUSEHOLD: &str = "\
new Rivera Household
set age 35
set income 120000
set checking 5000
set savings $20,000
set retirement401k 50000
set monthlyHousing 1500
";

#[test]
fn script_mode_builds_client_and_scores_it() {
    let home = fresh_home();
    let input = format!("{}score\nrisk\nexit\n", BUILD_YOUNG_HOUSEHOLD);

    script_cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("New client `Rivera Household` created."))
        .stdout(contains("63/100 (Good)"))
        .stdout(contains("Protection coverage"))
        .stdout(contains("CRITICAL (risk 95/100)"))
        .stdout(contains("Critical gaps").and(contains("Life Insurance, Disability Insurance")));
}

#[test]
fn report_can_be_printed_as_json() {
    let home = fresh_home();
    let input = format!("{}report --json\n", BUILD_YOUNG_HOUSEHOLD);

    script_cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("\"healthScore\": 63"))
        .stdout(contains("\"overallRiskScore\": 54"));
}

#[test]
fn commands_need_a_client() {
    let home = fresh_home();

    script_cli(&home)
        .write_stdin("report\nset income 1\n")
        .assert()
        .success()
        .stdout(contains("No client loaded."));
}

#[test]
fn unknown_command_gets_suggestion() {
    let home = fresh_home();

    script_cli(&home)
        .write_stdin("reprot\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `reprot`"))
        .stdout(contains("Did you mean `report`?"));
}

#[test]
fn invalid_values_are_rejected_and_state_kept() {
    let home = fresh_home();
    let input = format!(
        "{}set creditCards -500\nset hasEstatePlan maybe\nscore\n",
        BUILD_YOUNG_HOUSEHOLD
    );

    script_cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Credit cards cannot be negative"))
        .stdout(contains("is not yes/no for hasEstatePlan"))
        .stdout(contains("63/100 (Good)"));
}

#[test]
fn load_and_export_client_files() {
    let home = fresh_home();
    let source = home.join("client.json");
    let target = home.join("out").join("exported.json");
    fs::write(
        &source,
        serde_json::to_string(&young_household()).expect("serialize"),
    )
    .expect("write client");

    script_cli(&home)
        .write_stdin(format!(
            "load '{}'\nexport '{}'\n",
            source.display(),
            target.display()
        ))
        .assert()
        .success()
        .stdout(contains("Loaded client `Young Household`"))
        .stdout(contains("Health score 63/100, overall risk 54/100."));

    let exported = fs::read_to_string(&target).expect("exported file");
    assert!(exported.contains("\"retirement401k\": 50000.0"));
}

#[test]
fn profiles_save_list_open_and_delete() {
    let home = fresh_home();
    let input = format!(
        "{}save\nprofiles\nnew Scratch\nopen Rivera Household\nscore\ndelete Rivera Household\nprofiles\n",
        BUILD_YOUNG_HOUSEHOLD
    );

    script_cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Profile `Rivera Household` saved"))
        .stdout(contains("score 63/100"))
        .stdout(contains("Opened profile `Rivera Household`"))
        .stdout(contains("Profile `Rivera Household` deleted."))
        .stdout(contains("No saved profiles."));

    assert!(!home.join("profiles").join("rivera_household.json").exists());
}

#[test]
fn saved_profile_is_remembered_in_config() {
    let home = fresh_home();
    let input = format!("{}save\n", BUILD_YOUNG_HOUSEHOLD);

    script_cli(&home).write_stdin(input).assert().success();

    let profile = fs::read_to_string(home.join("profiles").join("rivera_household.json"))
        .expect("profile file");
    assert!(profile.contains("\"healthScore\": 63"));
    let config = fs::read_to_string(home.join("config").join("config.json")).expect("config");
    assert!(config.contains("\"last_opened_profile\": \"Rivera Household\""));
}

#[test]
fn config_changes_report_precision() {
    let home = fresh_home();
    let input = format!(
        "config set percent_decimals 2\n{}metrics\nconfig set percent_decimals 9\n",
        BUILD_YOUNG_HOUSEHOLD
    );

    script_cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("percent_decimals updated."))
        .stdout(contains("85.00%"))
        .stdout(contains("must be between 0 and 4"));
}

#[test]
fn config_backup_and_restore() {
    let home = fresh_home();

    let output = script_cli(&home)
        .write_stdin("config set quiet_mode on\nconfig backup before review\nconfig backups\n")
        .output()
        .expect("run cli");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let backup = stdout
        .split_whitespace()
        .find(|word| word.starts_with("config_") && word.ends_with(".json"))
        .expect("backup name listed")
        .to_string();
    assert!(backup.ends_with("_before-review.json"));

    script_cli(&home)
        .write_stdin(format!(
            "config set quiet_mode off\nconfig restore {}\nconfig show\n",
            backup
        ))
        .assert()
        .success()
        .stdout(contains("Configuration restored"))
        .stdout(predicate::str::is_match(r"quiet_mode\s+true").expect("regex"));
}

#[test]
fn help_lists_commands_and_usage() {
    let home = fresh_home();

    script_cli(&home)
        .write_stdin("help\nhelp set\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("profiles"))
        .stdout(contains("Usage: set <field> <value>"));
}

#[test]
fn exit_stops_processing() {
    let home = fresh_home();

    script_cli(&home)
        .write_stdin("exit\nnew Never\n")
        .assert()
        .success()
        .stdout(contains("New client").not());
}
