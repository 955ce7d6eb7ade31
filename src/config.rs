use std::env;
use std::string::String;

pub struct Config {
    pub stream_name: String,
    pub partition_key: String,
}

impl Config {
    pub fn load_from_env() -> Result<Config, String> {
        let conf = Config {
            stream_name: env::var("STREAM_NAME").unwrap_or("hellotesting".to_string()),
            partition_key: env::var("PARTITION_KEY").unwrap_or("1".to_string()),
        };

        if conf.stream_name.is_empty() {
            return Err("STREAM_NAME must not be empty".to_string());
        }

        Ok(conf)
    }
}
