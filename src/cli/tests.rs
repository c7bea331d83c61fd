#[cfg(test)]
mod cli_tests {
    mod args_tests {
        use clap::Parser;
        use crate::enums::Commands;
        use crate::structs::Cli;

        #[test]
        fn test_hook_with_defaults() {
            let cli = Cli::parse_from(["seedwatch", "hook", "ABCDEF"]);
            assert_eq!(cli.config, "seedwatch.toml");
            assert_eq!(cli.verbose, 0);
            assert_eq!(cli.command, Commands::Hook { torid: "ABCDEF".to_string() });
        }

        #[test]
        fn test_global_flags() {
            let cli = Cli::parse_from(["seedwatch", "--config", "/etc/sw.toml", "-vv", "worker", "--queue", "xfer"]);
            assert_eq!(cli.config, "/etc/sw.toml");
            assert_eq!(cli.verbose, 2);
            assert_eq!(cli.command, Commands::Worker { queue: Some("xfer".to_string()) });
        }

        #[test]
        fn test_list_flags() {
            let cli = Cli::parse_from(["seedwatch", "list", "--full", "--json"]);
            assert_eq!(cli.command, Commands::List { full: true, json: true, torid: None });
        }

        #[test]
        fn test_move_requires_destination() {
            assert!(Cli::try_parse_from(["seedwatch", "move", "ABCDEF"]).is_err());
        }
    }

    mod render_tests {
        use crate::cli::cli::render_torrent_line;
        use crate::torrent::enums::torrent_state::TorrentState;
        use crate::torrent::structs::torrent_info::TorrentInfo;

        #[test]
        fn test_torrent_line() {
            let info = TorrentInfo {
                hash: "abc".to_string(),
                name: "Show.S01E02".to_string(),
                total_size: 2048,
                completed_size: 1024,
                progress: 50.0,
                state: TorrentState::Downloading,
                ..TorrentInfo::default()
            };
            assert_eq!(render_torrent_line(&info), "abc downloading   50.0%    2.0 KiB Show.S01E02");
        }
    }

    mod store_guard_tests {
        use clap::Parser;
        use crate::cli::cli::{require_shared_store, run};
        use crate::common::enums::error_code::ErrorCode;
        use crate::config::structs::configuration::Configuration;
        use crate::store::enums::store_engine::StoreEngine;
        use crate::structs::Cli;

        fn memory_config() -> Configuration {
            let mut config = Configuration::init();
            config.store.engine = StoreEngine::memory;
            config.rules = String::from("/nonexistent/seedwatch/rules.toml");
            config
        }

        #[test]
        fn test_only_shared_store_is_accepted() {
            assert_eq!(require_shared_store(&Configuration::init()), Ok(()));
            assert_eq!(require_shared_store(&memory_config()), Err(ErrorCode::ConfBad));
        }

        #[tokio::test]
        async fn test_queue_commands_refuse_memory_store() {
            let config = memory_config();
            for argv in [
                vec!["seedwatch", "hook", "abc"],
                vec!["seedwatch", "queues"],
                vec!["seedwatch", "worker", "--queue", "xfer"],
                vec!["seedwatch", "relay"],
            ] {
                let cli = Cli::parse_from(argv.clone());
                assert_eq!(run(&cli, &config).await, ErrorCode::ConfBad, "{:?}", argv);
            }
        }
    }
}
