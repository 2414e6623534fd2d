use hamming74::args::{build_cli, parse_mode};
use hamming74::domain::Mode;
use hamming74::CodecConfig;

#[test]
fn test_codec_config_default() {
    let config = CodecConfig::default();
    assert_eq!(config.threads, 0); // 0 means auto-detect
    assert!(config.parallel); // Default should be parallel mode
}

#[test]
fn test_codec_config_creation() {
    let config = CodecConfig::new(4, true);
    assert_eq!(config.threads, 4);
    assert!(config.parallel);

    let config = CodecConfig::new(0, false);
    assert_eq!(config.threads, 0);
    assert!(!config.parallel);
}

#[test]
fn test_effective_threads() {
    // Sequential mode always uses one thread regardless of the count
    assert_eq!(CodecConfig::new(8, false).effective_threads(), 1);
    assert_eq!(CodecConfig::sequential().effective_threads(), 1);
    assert_eq!(CodecConfig::new(3, true).effective_threads(), 3);
    assert!(CodecConfig::new(0, true).effective_threads() >= 1);
}

#[test]
fn test_config_from_args() {
    let matches = build_cli()
        .try_get_matches_from(["hamming", "e", "in.txt", "--threads", "6"])
        .unwrap();
    assert_eq!(CodecConfig::from_args(&matches), CodecConfig::new(6, true));

    let matches = build_cli()
        .try_get_matches_from(["hamming", "d", "in.txt", "--no-parallel"])
        .unwrap();
    let config = CodecConfig::from_args(&matches);
    assert!(!config.parallel);
    assert_eq!(config.effective_threads(), 1);
}

#[test]
fn test_config_from_args_bad_thread_count_rejected() {
    let err = build_cli()
        .try_get_matches_from(["hamming", "e", "in.txt", "-t", "abc"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

    assert!(build_cli()
        .try_get_matches_from(["hamming", "--threads", "-3"])
        .is_err());
}

#[test]
fn test_config_from_args_default_threads() {
    let matches = build_cli().try_get_matches_from(["hamming"]).unwrap();
    assert_eq!(CodecConfig::from_args(&matches), CodecConfig::default());
}

#[test]
fn test_mode_argument() {
    let matches = build_cli()
        .try_get_matches_from(["hamming", "decode", "in.txt"])
        .unwrap();
    assert_eq!(matches.get_one::<Mode>("mode"), Some(&Mode::Decode));
    assert_eq!(
        matches.get_one::<String>("input").map(String::as_str),
        Some("in.txt")
    );

    let matches = build_cli().try_get_matches_from(["hamming"]).unwrap();
    assert!(matches.get_one::<Mode>("mode").is_none());
    assert!(matches.get_one::<String>("input").is_none());
}

#[test]
fn test_invalid_mode_argument_rejected() {
    assert!(build_cli()
        .try_get_matches_from(["hamming", "x", "in.txt"])
        .is_err());
    assert_eq!(parse_mode("e"), Ok(Mode::Encode));
    assert_eq!(parse_mode("encode"), Ok(Mode::Encode));
    assert_eq!(parse_mode("d"), Ok(Mode::Decode));
    assert!(parse_mode("E").is_err());
}
