//! CLI parse tests.

use super::{Cli, CliCommand, TransferArgs};
use artx_core::config::{ArtxConfig, RetryConfig};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn transfer_args(cli: Cli) -> TransferArgs {
    match cli.command {
        CliCommand::Upload { transfer, .. } | CliCommand::Download { transfer, .. } => transfer,
        CliCommand::Checksum { .. } => panic!("expected a transfer command"),
    }
}

#[test]
fn cli_parse_upload() {
    match parse(&["artx", "upload", "https://remote/pkg.tgz", "pkg.tgz"]).command {
        CliCommand::Upload {
            url,
            path,
            transfer,
        } => {
            assert_eq!(url, "https://remote/pkg.tgz");
            assert_eq!(path, Path::new("pkg.tgz"));
            assert!(transfer.retry.is_none());
            assert!(!transfer.insecure);
            assert!(transfer.headers.is_empty());
        }
        _ => panic!("expected Upload"),
    }
}

#[test]
fn cli_parse_download_with_sha256() {
    match parse(&["artx", "download", "https://remote/a", "out/a", "--sha256", "ABC"]).command {
        CliCommand::Download {
            url, path, sha256, ..
        } => {
            assert_eq!(url, "https://remote/a");
            assert_eq!(path, Path::new("out/a"));
            assert_eq!(sha256.as_deref(), Some("ABC"));
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["artx", "checksum", "file.bin"]).command {
        CliCommand::Checksum { path } => assert_eq!(path, Path::new("file.bin")),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_transfer_flags() {
    let cli = parse(&[
        "artx",
        "--config",
        "/tmp/artx.toml",
        "upload",
        "u",
        "p",
        "--retry",
        "3",
        "--retry-wait",
        "0",
        "--token",
        "t",
        "--insecure",
        "--header",
        "X-One: 1",
        "--header",
        "X-Two:2",
    ]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/artx.toml")));
    let t = transfer_args(cli);
    assert_eq!(t.retry, Some(3));
    assert_eq!(t.retry_wait, Some(0));
    assert_eq!(t.token.as_deref(), Some("t"));
    assert!(t.insecure);
    assert_eq!(
        t.headers,
        vec![
            ("X-One".to_string(), "1".to_string()),
            ("X-Two".to_string(), "2".to_string())
        ]
    );
}

#[test]
fn cli_rejects_zero_retry() {
    assert!(Cli::try_parse_from(["artx", "upload", "u", "p", "--retry", "0"]).is_err());
}

#[test]
fn cli_rejects_malformed_header() {
    assert!(Cli::try_parse_from(["artx", "upload", "u", "p", "--header", "novalue"]).is_err());
}

#[test]
fn flags_override_config() {
    let mut cfg = ArtxConfig::default();
    cfg.retry = Some(RetryConfig {
        max_attempts: 5,
        wait_secs: 9,
        ..RetryConfig::default()
    });
    let t = transfer_args(parse(&[
        "artx", "download", "u", "p", "--retry", "2", "--retry-wait", "1", "--insecure",
    ]));
    let opts = t.to_options(&cfg);
    assert_eq!(opts.retry.max_attempts, 2);
    assert_eq!(opts.retry.backoff.wait_secs(0), 1);
    assert!(!opts.verify_tls);
}

#[test]
fn config_used_without_flags() {
    let mut cfg = ArtxConfig::default();
    cfg.retry = Some(RetryConfig {
        max_attempts: 4,
        wait_secs: 3,
        ..RetryConfig::default()
    });
    let t = transfer_args(parse(&["artx", "upload", "u", "p", "--token", ""]));
    let opts = t.to_options(&cfg);
    assert_eq!(opts.retry.max_attempts, 4);
    assert_eq!(opts.retry.backoff.wait_secs(0), 3);
    assert!(opts.verify_tls);
    // An empty token is no token.
    assert!(!opts.credential.has_token());
}
