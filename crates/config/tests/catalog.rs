use std::fs;
use std::io::Write;

use mars_config::{ConfigError, find_mission, load_missions};

const INSIGHT_TOML: &str = r#"
name = "InSight"
landing_site = "Elysium Planitia"
landing_date = "2018-330T19:44:52.444"
sol_origin = "2018-330T05:10:50.3356"
sol_origin_ref = 0
longitude = 224.03
latitude = 4.502384
"#;

const SPIRIT_TOML: &str = r#"
name = "Spirit"
landing_date = "2004-01-04T04:35:00"
sol_origin = "2004-01-03T12:16:05.345"
sol_origin_ref = 1
longitude = 175.4785
latitude = -14.5718
"#;

#[test]
fn loads_a_single_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insight.toml");
    fs::write(&path, INSIGHT_TOML).unwrap();

    let missions = load_missions(&path).unwrap();
    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0].name, "InSight");
    assert_eq!(missions[0].landing_site.as_deref(), Some("Elysium Planitia"));
    assert_eq!(missions[0].sol_origin_ref, 0);

    let site = missions[0].site().unwrap();
    assert!((site.longitude - 224.03).abs() < 1e-12);
}

#[test]
fn loads_a_directory_of_toml_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("spirit.toml"), SPIRIT_TOML).unwrap();
    fs::write(dir.path().join("insight.toml"), INSIGHT_TOML).unwrap();
    // non-TOML files in the directory are ignored
    fs::write(dir.path().join("README.md"), "notes").unwrap();

    let missions = load_missions(dir.path()).unwrap();
    assert_eq!(missions.len(), 2);
    assert_eq!(missions[0].name, "InSight");
    assert_eq!(missions[1].name, "Spirit");
}

#[test]
fn loads_a_yaml_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.yaml");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(
        file,
        "- name: Curiosity\n  landing_date: \"2012-08-06T05:17:57\"\n  \
         sol_origin: \"2012-08-05T08:00:02.931\"\n  longitude: 222.6\n  latitude: -4.59"
    )
    .unwrap();

    let missions = load_missions(&path).unwrap();
    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0].name, "Curiosity");
    // sol_origin_ref defaults to 0 when omitted
    assert_eq!(missions[0].sol_origin_ref, 0);
}

#[test]
fn find_mission_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("insight.toml"), INSIGHT_TOML).unwrap();
    let missions = load_missions(dir.path()).unwrap();

    assert!(find_mission(&missions, "insight").is_ok());
    assert!(find_mission(&missions, "INSIGHT").is_ok());
    let err = find_mission(&missions, "Viking").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMission(name) if name == "Viking"));
}

#[test]
fn bad_epoch_string_names_the_mission() {
    let dir = tempfile::tempdir().unwrap();
    let bad = INSIGHT_TOML.replace("2018-330T19:44:52.444", "sol 0, late afternoon");
    fs::write(dir.path().join("insight.toml"), bad).unwrap();
    let missions = load_missions(dir.path()).unwrap();

    let err = missions[0].site().unwrap_err();
    assert!(matches!(err, ConfigError::Epoch { ref mission, .. } if mission == "InSight"));
    assert!(err.to_string().contains("InSight"));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = INSIGHT_TOML.replace("latitude = 4.502384", "latitude = 104.5");
    fs::write(dir.path().join("insight.toml"), bad).unwrap();
    let missions = load_missions(dir.path()).unwrap();

    let err = missions[0].site().unwrap_err();
    assert!(matches!(err, ConfigError::Site { ref mission, .. } if mission == "InSight"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"InSight\"\nlongitude = ").unwrap();
    assert!(matches!(load_missions(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn shipped_catalog_validates() {
    let catalog = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/missions");
    let missions = load_missions(catalog).unwrap();
    assert_eq!(missions.len(), 5);
    for mission in &missions {
        mission.site().unwrap();
    }
    assert!(find_mission(&missions, "insight").is_ok());
}
