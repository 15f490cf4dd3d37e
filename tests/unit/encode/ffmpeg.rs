use super::*;

#[test]
fn config_validation_catches_bad_values() {
    assert!(
        default_mp4_config("target/out.mp4", 0, 10, 60)
            .validate()
            .is_err()
    );
    assert!(
        default_mp4_config("target/out.mp4", 301, 200, 60)
            .validate()
            .is_err()
    );
    assert!(
        default_mp4_config("target/out.mp4", 300, 200, 0)
            .validate()
            .is_err()
    );
    default_mp4_config("target/out.mp4", 300, 200, 60)
        .validate()
        .unwrap();
}

#[test]
fn ensure_parent_dir_accepts_bare_file_names() {
    ensure_parent_dir(Path::new("out.mp4")).unwrap();

    let dir = PathBuf::from("target").join("encode_unit").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    ensure_parent_dir(&dir.join("out.mp4")).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn encoder_rejects_odd_sizes_before_spawning() {
    let dir = PathBuf::from("target").join("encode_unit");
    let err = FfmpegEncoder::new(default_mp4_config(dir.join("odd.mp4"), 301, 200, 60))
        .err()
        .unwrap();
    assert!(matches!(err, LevelupError::Validation(_)), "{err}");
}
