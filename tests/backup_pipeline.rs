use std::fs;
use std::path::Path;

use tracksim::cli::bunch_of_run;
use tracksim::persistence::{DEFAULT_SEPARATOR, SAVED_VALUES_NAMES};
use tracksim::{
    backup_path, initialize_backup, run_with, save_matrix, RandomSource, SimParameters, WriteMode,
};

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn quick_params() -> SimParameters {
    let mut sp = SimParameters::default_config();
    sp.policy.selector = 1;
    sp.environment.track_len = 3.0;
    sp
}

#[test]
fn header_then_two_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("two_rows.csv");

    initialize_backup(&SAVED_VALUES_NAMES, &out, DEFAULT_SEPARATOR).unwrap();
    save_matrix(
        &[vec![4.0, 1.25, 80.0], vec![6.0, 2.5, 120.0]],
        &out,
        DEFAULT_SEPARATOR,
        WriteMode::Append,
    )
    .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "score,computational_cost,nb_calls");
    for line in &lines[1..] {
        assert_eq!(line.matches(',').count(), 2);
        assert!(!line.ends_with(','));
    }
    assert!(content.ends_with('\n'));
}

#[test]
fn batch_writes_one_line_per_episode_plus_header() {
    let dir = tempfile::tempdir().unwrap();
    let sp = quick_params();

    for nbsim in [0u32, 1, 7] {
        let out = dir.path().join(format!("batch_{}.csv", nbsim));
        let mut rng = RandomSource::seeded(u64::from(nbsim));

        run_with(&sp, nbsim, false, true, &out, &mut rng).unwrap();

        let lines = read_lines(&out);
        assert_eq!(lines.len(), nbsim as usize + 1, "nbsim = {}", nbsim);
        assert_eq!(lines[0], "score,computational_cost,nb_calls");
    }
}

#[test]
fn rerun_overwrites_previous_batch() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("rerun.csv");
    let sp = quick_params();
    let mut rng = RandomSource::seeded(5);

    run_with(&sp, 6, false, true, &out, &mut rng).unwrap();
    run_with(&sp, 2, false, true, &out, &mut rng).unwrap();

    assert_eq!(read_lines(&out).len(), 3);
}

#[test]
fn bunch_of_run_uses_parameter_derived_path() {
    let config_dir = tempfile::tempdir().unwrap();
    let output_root = tempfile::tempdir().unwrap();
    fs::write(
        config_dir.path().join("main.toml"),
        r#"
[environment]
track_len = 2.0
stddev = 0.05
failure_probability = 0.0

[policy]
selector = 0
budget = 10
horizon = 4
"#,
    )
    .unwrap();

    let mut rng = RandomSource::seeded(3);
    let path = bunch_of_run(config_dir.path(), output_root.path(), 3, &mut rng).unwrap();

    let sp = SimParameters::load_from(config_dir.path()).unwrap();
    assert_eq!(path, output_root.path().join(backup_path(&sp)));
    assert!(path
        .to_string_lossy()
        .ends_with("data/0_2_005_000_10_4_070_090_000_5_050_010.csv"));
    assert_eq!(read_lines(&path).len(), 4);
}

#[test]
fn bunch_of_run_rejects_invalid_parameters() {
    let config_dir = tempfile::tempdir().unwrap();
    let output_root = tempfile::tempdir().unwrap();
    fs::write(
        config_dir.path().join("main.toml"),
        "[environment]\nstddev = -1.0\n",
    )
    .unwrap();

    let mut rng = RandomSource::seeded(3);
    assert!(bunch_of_run(config_dir.path(), output_root.path(), 3, &mut rng).is_err());
    assert!(!output_root.path().join("data").exists());
}
