use std::fs;
use zsvg::from_file;

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let valid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid");
    for entry in fs::read_dir(valid_dir)? {
        let path = entry?.path();
        if let Err(err) = from_file(&path) {
            return Err(std::io::Error::other(format!(
                "Failed to parse valid file {path:?}: {err}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let invalid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid");
    for entry in fs::read_dir(invalid_dir)? {
        let path = entry?.path();
        if from_file(&path).is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to parse invalid file: {path:?}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let result = from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/absent.svg"));
    match result {
        Err(err) => {
            assert!(matches!(err.kind(), zsvg::ErrorKind::Io(_)));
            assert!(err.message().contains("absent.svg"));
        }
        Ok(_) => panic!("reading a missing file should fail"),
    }
}
