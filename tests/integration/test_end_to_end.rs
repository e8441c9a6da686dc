// エンドツーエンド統合テスト
use data_filter::{
    classifier::classify,
    core::{RunConfig, StatsLevel, WriteMode},
    reporting::{NoOpRunReporter, Statistics},
    storage::local::LocalFileStore,
    App,
};
use tempfile::TempDir;

use crate::fixtures::{read_output, write_input};

fn app() -> App<LocalFileStore, NoOpRunReporter> {
    App::new(LocalFileStore::new(), NoOpRunReporter::new())
}

#[tokio::test]
async fn test_mixed_input_is_sorted_into_three_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "in.txt",
        &["42", "-7", "3.14", "hello", "1e10", ""],
    );

    let config = RunConfig::new()
        .with_inputs([input])
        .with_output_dir(temp_dir.path());
    let outcome = app().run(&config).await.unwrap();

    assert_eq!(outcome.state.integers, vec![42, -7]);
    assert_eq!(outcome.state.floats, vec![3.14, 1e10]);
    assert_eq!(outcome.state.strings, vec!["hello".to_string(), String::new()]);

    assert_eq!(
        read_output(temp_dir.path(), "integers.txt").unwrap(),
        vec!["42", "-7"]
    );
    assert_eq!(
        read_output(temp_dir.path(), "floats.txt").unwrap(),
        vec!["3.14", "10000000000.0"]
    );
    assert_eq!(
        read_output(temp_dir.path(), "strings.txt").unwrap(),
        vec!["hello", ""]
    );

    let integers = Statistics::compute(&outcome.state).integers.unwrap();
    assert_eq!(
        (integers.count, integers.min, integers.max, integers.sum),
        (2, -7, 42, 35)
    );
    assert_eq!(integers.mean, 17.5);
}

#[tokio::test]
async fn test_files_are_processed_in_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_input(temp_dir.path(), "first.txt", &["1", "2"]);
    let second = write_input(temp_dir.path(), "second.txt", &["3"]);

    let config = RunConfig::new()
        .with_inputs([first, second])
        .with_output_dir(temp_dir.path());
    app().run(&config).await.unwrap();

    assert_eq!(
        read_output(temp_dir.path(), "integers.txt").unwrap(),
        vec!["1", "2", "3"]
    );
    assert!(read_output(temp_dir.path(), "floats.txt").is_none());
    assert!(read_output(temp_dir.path(), "strings.txt").is_none());
}

#[tokio::test]
async fn test_line_count_is_conserved() {
    let temp_dir = TempDir::new().unwrap();
    let a = write_input(temp_dir.path(), "a.txt", &["1", "x", "", " 2 ", "2.5e-3"]);
    let b = write_input(temp_dir.path(), "b.txt", &["9223372036854775808", "NaN", "-0"]);

    let config = RunConfig::new()
        .with_inputs([a, b])
        .with_output_dir(temp_dir.path());
    let outcome = app().run(&config).await.unwrap();

    assert_eq!(outcome.state.total_lines(), 8);

    let written: usize = outcome
        .write_summary
        .written
        .iter()
        .map(|(_, lines)| lines)
        .sum();
    assert_eq!(written, 8);
}

#[tokio::test]
async fn test_append_mode_concatenates_runs() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let run1 = write_input(temp_dir.path(), "run1.txt", &["1", "a"]);
    let run2 = write_input(temp_dir.path(), "run2.txt", &["2", "b"]);

    for input in [run1, run2] {
        let config = RunConfig::new()
            .with_inputs([input])
            .with_output_dir(&out_dir)
            .with_prefix("log_")
            .with_write_mode(WriteMode::Append);
        app().run(&config).await.unwrap();
    }

    assert_eq!(
        read_output(&out_dir, "log_integers.txt").unwrap(),
        vec!["1", "2"]
    );
    assert_eq!(read_output(&out_dir, "log_strings.txt").unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_overwrite_mode_replaces_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let long = write_input(temp_dir.path(), "long.txt", &["100", "200", "300"]);
    let short = write_input(temp_dir.path(), "short.txt", &["4"]);

    for input in [long, short] {
        let config = RunConfig::new()
            .with_inputs([input])
            .with_output_dir(temp_dir.path());
        app().run(&config).await.unwrap();
    }

    assert_eq!(read_output(temp_dir.path(), "integers.txt").unwrap(), vec!["4"]);
}

#[tokio::test]
async fn test_output_values_reclassify_to_the_same_category() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        temp_dir.path(),
        "in.txt",
        &["7", "2.0", "1e16", "0.1", "-3.5E2", "text", "  spaced  "],
    );

    let config = RunConfig::new()
        .with_inputs([input])
        .with_output_dir(temp_dir.path());
    let outcome = app().run(&config).await.unwrap();

    for (name, expected) in [
        ("integers.txt", outcome.state.integers.len()),
        ("floats.txt", outcome.state.floats.len()),
        ("strings.txt", outcome.state.strings.len()),
    ] {
        let lines = read_output(temp_dir.path(), name).unwrap();
        assert_eq!(lines.len(), expected);
        for line in lines {
            let category = classify(&line).category();
            assert_eq!(category.base_filename(), name, "{line:?} moved category");
        }
    }
}

#[tokio::test]
async fn test_full_stats_text_for_strings_only() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "in.txt", &["ab", "abcd", "x"]);

    let config = RunConfig::new()
        .with_inputs([input])
        .with_output_dir(temp_dir.path());
    let outcome = app().run(&config).await.unwrap();

    assert_eq!(
        outcome.statistics().render_text(StatsLevel::Full),
        "Statistics:\nStrings:\n  Count: 3\n  Shortest length: 1\n  Longest length: 4\n"
    );
}
