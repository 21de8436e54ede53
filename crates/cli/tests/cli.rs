use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn popcat() -> Command {
    Command::cargo_bin("popcat").unwrap()
}

#[test]
fn test_list_shows_catalog() {
    popcat()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("homo_sapiens"))
        .stdout(predicate::str::contains("HapmapII_GRCh37"))
        .stdout(predicate::str::contains("GutenkunstThreePopOutOfAfrica"))
        .stdout(predicate::str::contains("TennessenEuropean"));
}

#[test]
fn test_genome_default_species() {
    popcat()
        .arg("genome")
        .assert()
        .success()
        .stdout(predicate::str::contains("Genome: homo_sapiens"))
        .stdout(predicate::str::contains("Chromosomes: 24"))
        .stdout(predicate::str::contains("248956422"));
}

#[test]
fn test_genome_unknown_species() {
    popcat()
        .arg("genome")
        .arg("--species")
        .arg("pan_troglodytes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pan_troglodytes"));
}

#[test]
fn test_maps_reports_cached_files() {
    let temp = tempdir().unwrap();
    let map_dir = temp.path().join("HapmapII_GRCh37");
    fs::create_dir_all(&map_dir).unwrap();
    fs::write(map_dir.join("genetic_map_GRCh37_chr22.txt"), "").unwrap();

    popcat()
        .arg("maps")
        .arg("--cache-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Genetic map: HapmapII_GRCh37"))
        .stdout(predicate::str::contains("Cached: 1/24 chromosomes"));
}

#[test]
fn test_maps_cache_dir_from_settings() {
    let temp = tempdir().unwrap();
    let map_dir = temp.path().join("maps").join("HapmapII_GRCh37");
    fs::create_dir_all(&map_dir).unwrap();
    fs::write(map_dir.join("genetic_map_GRCh37_chr1.txt"), "").unwrap();
    fs::write(map_dir.join("genetic_map_GRCh37_chr2.txt"), "").unwrap();

    let settings = temp.path().join("settings.json");
    let cache_dir = temp.path().join("maps");
    fs::write(
        &settings,
        serde_json::json!({ "cache_dir": cache_dir }).to_string(),
    )
    .unwrap();

    popcat()
        .arg("--config")
        .arg(&settings)
        .arg("maps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cached: 2/24 chromosomes"));
}

#[test]
fn test_model_shows_parameters() {
    popcat()
        .arg("model")
        .arg("GutenkunstThreePopOutOfAfrica")
        .assert()
        .success()
        .stdout(predicate::str::contains("Populations: 3"))
        .stdout(predicate::str::contains("YRI"))
        .stdout(predicate::str::contains("Demographic Events"));
}

#[test]
fn test_unknown_model_fails() {
    popcat()
        .arg("model")
        .arg("NoSuchModel")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoSuchModel"));
}

#[test]
fn test_debug_prints_epochs() {
    popcat()
        .arg("debug")
        .arg("TennessenEuropean")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 epochs"))
        .stdout(predicate::str::contains("Epoch 0:"))
        .stdout(predicate::str::contains("Epoch 4:"))
        .stdout(predicate::str::contains("inf"));
}

#[test]
fn test_validate_builtin_models() {
    popcat()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_export_to_stdout() {
    let output = popcat()
        .arg("export")
        .arg("GutenkunstThreePopOutOfAfrica")
        .arg("--sample")
        .arg("YRI:2")
        .arg("--sample")
        .arg("2:3")
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["model_id"], "GutenkunstThreePopOutOfAfrica");
    let samples = config["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0]["population"], 0);
    assert_eq!(samples[4]["population"], 2);
    assert_eq!(config["population_configurations"].as_array().unwrap().len(), 3);
    assert!(config.get("length").is_none());
}

#[test]
fn test_export_with_chromosome_to_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.json");

    popcat()
        .arg("export")
        .arg("TennessenEuropean")
        .arg("-S")
        .arg("CEU:4")
        .arg("--chromosome")
        .arg("chr22")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 'TennessenEuropean'"));

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(config["length"], 50818468);
    assert_eq!(config["samples"].as_array().unwrap().len(), 4);
    assert!(config["mutation_rate"].is_number());
}

#[test]
fn test_export_unknown_population() {
    popcat()
        .arg("export")
        .arg("TennessenEuropean")
        .arg("--sample")
        .arg("YRI:2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown population 'YRI'"));
}

#[test]
fn test_export_population_index_out_of_range() {
    popcat()
        .arg("export")
        .arg("TennessenEuropean")
        .arg("--sample")
        .arg("3:2")
        .assert()
        .failure();
}

#[test]
fn test_export_bad_sample_spec() {
    popcat()
        .arg("export")
        .arg("TennessenEuropean")
        .arg("--sample")
        .arg("CEU")
        .assert()
        .failure()
        .stderr(predicate::str::contains("POPULATION:COUNT"));
}
