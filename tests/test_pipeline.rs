
use review_preprocessing::error::PreprocessingError;
use review_preprocessing::pipeline::run;
use review_preprocessing::PreprocessingConfig;
use std::fs;
use std::io::Write;
use test_utils::write_generated_reviews;

fn config_for(root: &std::path::Path) -> PreprocessingConfig {
    PreprocessingConfig::from_dirs(
        &root.join("input"),
        &root.join("train"),
        &root.join("validation"),
        0.3,
    )
}

#[test]
fn test_small_dataset_goes_to_train() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let config = config_for(root.path());
    fs::create_dir_all(root.path().join("input"))?;
    let mut input = fs::File::create(&config.input_path)?;
    write!(
        input,
        "review,sentiment\n\
         \"A great [spoiler] film\",positive\n\
         \"Terrible acting.<br /><br />Skip it!\",negative\n\
         \"It was fine\",neutral\n"
    )?;

    //        When
    let summary = run(&config)?;

    //        Then
    assert_eq!(summary.train_rows, 3);
    assert_eq!(summary.validation_rows, 0);
    assert_eq!(
        fs::read_to_string(&config.train_output_path)?,
        "__label__positive great film\n\
         __label__negative Terrible acting br br Skip it \n\
         It was fine\n"
    );
    assert_eq!(fs::read_to_string(&config.validation_output_path)?, "");
    Ok(())
}

#[test]
fn test_split_at_fixed_boundary() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let config = config_for(root.path());
    write_generated_reviews(&root.path().join("input"), 25001)?;

    //        When
    let summary = run(&config)?;

    //        Then
    assert_eq!(summary.train_rows, 25000);
    assert_eq!(summary.validation_rows, 1);
    let train = fs::read_to_string(&summary.train_output_path)?;
    let validation = fs::read_to_string(&summary.validation_output_path)?;
    assert_eq!(train.lines().count(), 25000);
    assert_eq!(
        train.lines().next(),
        Some("__label__positive Review number 0 quite good ")
    );
    assert_eq!(
        validation,
        "__label__positive Review number 25000 quite good \n"
    );
    Ok(())
}

#[test]
fn test_split_ratio_is_not_applied() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let mut config = config_for(root.path());
    config.train_test_split_ratio = 0.5;
    write_generated_reviews(&root.path().join("input"), 10)?;

    //        When
    let summary = run(&config)?;

    //        Then
    assert_eq!(summary.train_rows, 10);
    assert_eq!(summary.validation_rows, 0);
    Ok(())
}

#[test]
fn test_written_lines_match_records() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let mut config = config_for(root.path());
    config.split_boundary = 4;
    write_generated_reviews(&root.path().join("input"), 7)?;

    //        When
    let summary = run(&config)?;

    //        Then
    let train = fs::read_to_string(&summary.train_output_path)?;
    let validation = fs::read_to_string(&summary.validation_output_path)?;
    assert_eq!(train.lines().count(), summary.train_rows);
    assert_eq!(validation.lines().count(), summary.validation_rows);
    assert_eq!(summary.validation_rows, 3);
    for line in train.lines().chain(validation.lines()) {
        assert!(line.starts_with("__label__"));
    }
    Ok(())
}

#[test]
fn test_missing_input_file() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let config = config_for(root.path());

    //        When
    let result = run(&config);

    //        Then
    assert!(matches!(result, Err(PreprocessingError::FileNotFound(_))));
    assert!(!config.train_output_path.exists());
    Ok(())
}

#[test]
fn test_missing_review_column() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let config = config_for(root.path());
    fs::create_dir_all(root.path().join("input"))?;
    fs::write(&config.input_path, "text,sentiment\nhello,positive\n")?;

    //        When
    let result = run(&config);

    //        Then
    assert!(matches!(
        result,
        Err(PreprocessingError::MissingColumn(name)) if name == "review"
    ));
    Ok(())
}

#[test]
fn test_empty_and_missing_reviews_are_written_unquoted() -> anyhow::Result<()> {
    //        Given
    let root = tempfile::tempdir()?;
    let config = config_for(root.path());
    fs::create_dir_all(root.path().join("input"))?;
    fs::write(
        &config.input_path,
        "review,sentiment\n[spoiler],neutral\n,neutral\nok fine,positive\n",
    )?;

    //        When
    let summary = run(&config)?;

    //        Then
    assert_eq!(summary.train_rows, 3);
    assert_eq!(
        fs::read_to_string(&config.train_output_path)?,
        "\nnan\n__label__positive ok fine\n"
    );
    Ok(())
}
