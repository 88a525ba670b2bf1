use numscope_load::{
    BinaryLoader, BinaryWriter, Framing, LoadConfig, LoadError, SyntheticConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

#[test]
fn test_write_then_load_counted() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("values.bin");
    let values = vec![7, -3, 0, i32::MAX, i32::MIN, 7];

    BinaryWriter::new(Framing::Counted).write(&path, &values).unwrap();

    let config = LoadConfig::builder()
        .path(path.clone())
        .create_if_missing(false)
        .build()
        .unwrap();
    let dataset = BinaryLoader::new().load(&config).unwrap();

    assert_eq!(dataset.as_slice(), values.as_slice());
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 4 + 4 * 6);
}

#[test]
fn test_write_then_load_raw() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("raw.bin");

    BinaryWriter::new(Framing::Raw).write(&path, &[1, 2, 3]).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 12);

    let config = LoadConfig::builder()
        .path(path)
        .framing(Framing::Raw)
        .create_if_missing(false)
        .build()
        .unwrap();
    let dataset = BinaryLoader::new().load(&config).unwrap();
    assert_eq!(dataset.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_missing_file_without_create() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.bin");

    let config = LoadConfig::builder()
        .path(path.clone())
        .create_if_missing(false)
        .build()
        .unwrap();
    let err = BinaryLoader::new().load(&config).unwrap_err();

    assert!(matches!(err, LoadError::NotFound { .. }));
    assert!(!path.exists());
}

#[test]
fn test_missing_file_is_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.bin");

    let config = LoadConfig::builder()
        .path(path.clone())
        .synthetic(
            SyntheticConfig::builder()
                .count(50usize)
                .min(10)
                .max(20)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let dataset = BinaryLoader::new().load_with_rng(&config, &mut rng).unwrap();

    assert!(path.exists());
    assert_eq!(dataset.len(), 50);
    assert!(dataset.as_slice().iter().all(|v| (10..=20).contains(v)));

    // A second load reads the file that was written rather than regenerating.
    let again = BinaryLoader::new().load(&config).unwrap();
    assert_eq!(again, dataset);
}

#[test]
fn test_malformed_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.bin");
    std::fs::write(&path, [5u8, 0, 0, 0, 1, 0, 0, 0]).unwrap();

    let err = BinaryLoader::new().load(&LoadConfig::new(&path)).unwrap_err();
    assert!(err.is_malformed());
    assert!(err.to_string().contains("declares 5 values but holds 1"));
}

#[test]
fn test_counted_zero_is_empty_dataset() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.bin");
    BinaryWriter::new(Framing::Counted).write(&path, &[]).unwrap();

    let dataset = BinaryLoader::new().load(&LoadConfig::new(&path)).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_write_into_missing_directory_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no-such-dir").join("values.bin");

    let err = BinaryWriter::new(Framing::Counted).write(&path, &[1]).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn test_synthetic_creation_failure_is_not_reported_as_missing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no-such-dir").join("fresh.bin");

    let mut rng = StdRng::seed_from_u64(0);
    let err = BinaryLoader::new()
        .load_with_rng(&LoadConfig::new(&path), &mut rng)
        .unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    assert!(!err.to_string().contains("not found"));
}

#[test]
fn test_invalid_synthetic_range_fails_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.bin");

    let mut config = LoadConfig::new(&path);
    config.synthetic = SyntheticConfig {
        count: 10,
        min: 3,
        max: -3,
    };

    let mut rng = StdRng::seed_from_u64(0);
    let err = BinaryLoader::new().load_with_rng(&config, &mut rng).unwrap_err();

    assert!(matches!(err, LoadError::InvalidConfig { .. }));
    assert!(!path.exists());
}
