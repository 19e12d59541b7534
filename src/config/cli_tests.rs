//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter(["slack-relay", "--url", "https://hooks.example.com/X"]);

        assert_eq!(cli.url.as_deref(), Some("https://hooks.example.com/X"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_message_options() {
        let cli = Cli::parse_from_iter([
            "slack-relay",
            "--format",
            "{host}: {message}",
            "--channel",
            "#ops",
            "--username",
            "{host} bot",
            "--icon-emoji",
            ":fire:",
            "--icon-url",
            "https://example.com/i.png",
            "--attachment",
            r#"{"text":"a"}"#,
            "--attachment",
            r#"{"text":"b"}"#,
        ]);

        assert_eq!(cli.format.as_deref(), Some("{host}: {message}"));
        assert_eq!(cli.channel.as_deref(), Some("#ops"));
        assert_eq!(cli.username.as_deref(), Some("{host} bot"));
        assert_eq!(cli.icon_emoji.as_deref(), Some(":fire:"));
        assert_eq!(cli.icon_url.as_deref(), Some("https://example.com/i.png"));
        assert_eq!(cli.attachments, vec![r#"{"text":"a"}"#, r#"{"text":"b"}"#]);
    }

    #[test]
    fn parse_proxy_options() {
        let cli = Cli::parse_from_iter([
            "slack-relay",
            "--proxy",
            "proxy.internal",
            "--proxy-port",
            "3128",
        ]);

        assert_eq!(cli.proxy.as_deref(), Some("proxy.internal"));
        assert_eq!(cli.proxy_port, Some(3128));
    }

    #[test]
    fn parse_filter_options() {
        let cli = Cli::parse_from_iter([
            "slack-relay",
            "--type",
            "nginx",
            "--tag",
            "alert",
            "--tag",
            "prod",
            "--exclude-tag",
            "muted",
        ]);

        assert_eq!(cli.event_type.as_deref(), Some("nginx"));
        assert_eq!(cli.tags, vec!["alert", "prod"]);
        assert_eq!(cli.exclude_tags, vec!["muted"]);
    }

    #[test]
    fn parse_misc_options() {
        let cli = Cli::parse_from_iter([
            "slack-relay",
            "--config",
            "/path/to/config.toml",
            "--input",
            "/var/log/events.ndjson",
            "--dry-run",
            "--verbose",
        ]);

        assert_eq!(
            cli.config.as_ref().unwrap().to_str(),
            Some("/path/to/config.toml")
        );
        assert_eq!(
            cli.input.as_ref().unwrap().to_str(),
            Some("/var/log/events.ndjson")
        );
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn invalid_proxy_port_is_rejected() {
        use clap::Parser;

        let result = Cli::try_parse_from(["slack-relay", "--proxy-port", "99999"]);
        assert!(result.is_err());
    }

    #[test]
    fn default_values() {
        let cli = Cli::parse_from_iter(["slack-relay"]);

        assert!(cli.url.is_none());
        assert!(cli.format.is_none());
        assert!(cli.proxy.is_none());
        assert!(cli.proxy_port.is_none());
        assert!(cli.attachments.is_empty());
        assert!(cli.tags.is_empty());
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }
}

mod init_command {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["slack-relay", "init"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("slack-relay.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["slack-relay", "init", "-o", "/custom/path/config.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("/custom/path/config.toml"));
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn no_command_in_run_mode() {
        let cli = Cli::parse_from_iter(["slack-relay", "--url", "https://example.com"]);
        assert!(cli.command.is_none());
    }
}
