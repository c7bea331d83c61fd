use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::notify_config::NotifyConfig;
use crate::config::structs::queue_config::QueueConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::transfer_config::TransferConfig;

const NAME_PATTERN: &str = r"^[a-z_][a-z0-9_]{0,30}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: None,
            rules: String::from("seedwatch.rules.toml"),
            store: StoreConfig::default(),
            client: ClientConfig::default(),
            queue: QueueConfig::default(),
            xfer: TransferConfig::default(),
            notify: NotifyConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Loads `path`; when missing or corrupt and `create` is set, writes the
    /// defaults there and fails so the operator can edit them first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&format!("could not serialize defaults: {}", e)))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut check_map = vec![
            ("[store] prefix", self.store.prefix.clone()),
        ];
        for class in &self.queue.classes {
            check_map.push(("[queue] class", class.clone()));
        }

        for (name, value) in check_map {
            Self::validate_value(name, &value, NAME_PATTERN)?;
        }

        if self.queue.classes.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[queue] classes must not be empty")));
        }
        if self.queue.poll_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[queue] poll_interval must be greater than zero")));
        }
        if self.rules.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("rules path must not be empty")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("bad pattern {}: {}", regex, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
