#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::store::enums::store_engine::StoreEngine;
        use crate::torrent::enums::torrent_backend::TorrentBackend;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.store.engine, StoreEngine::redis);
            assert_eq!(config.store.prefix, "seedwatch");
            assert_eq!(config.client.backend, TorrentBackend::deluge);
            assert_eq!(config.queue.classes, vec![String::from("xfer")]);
            assert_eq!(config.queue.poll_interval, 5);
            assert!(config.xfer.hostname.is_empty());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = config.to_toml().unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.store.address, config.store.address);
            assert_eq!(parsed.queue.classes, config.queue.classes);
            assert_eq!(parsed.xfer.port, 22);
        }

        #[test]
        fn test_configuration_minimal_document() {
            let parsed = Configuration::load(b"log_level = \"debug\"\nrules = \"r.toml\"\n").unwrap();
            assert_eq!(parsed.log_level, "debug");
            assert_eq!(parsed.rules, "r.toml");
            assert_eq!(parsed.store.database, 11);
            assert!(!parsed.notify.enabled);
        }

        #[test]
        fn test_configuration_rejects_bad_prefix() {
            let mut config = Configuration::init();
            config.store.prefix = String::from("Bad Prefix!");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_configuration_rejects_zero_poll_interval() {
            let mut config = Configuration::init();
            config.queue.poll_interval = 0;
            let error = config.validate().unwrap_err();
            assert!(format!("{}", error).contains("poll_interval"));
        }

        #[test]
        fn test_configuration_rejects_empty_classes() {
            let mut config = Configuration::init();
            config.queue.classes.clear();
            assert!(config.validate().is_err());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("broken"));
            assert_eq!(format!("{}", error), "[VALIDATE CONFIG] broken");
        }

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            assert_eq!(format!("{}", error), "missing");
        }
    }
}
