use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yml";

pub fn get() -> String {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());

    if !Path::new(&config_path).is_file() {
        panic!(
            "{config_path} must exist; set {CONFIG_PATH_ENV} or place config.yml in the current directory"
        )
    }

    config_path
}
