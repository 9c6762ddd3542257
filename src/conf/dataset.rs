use serde::{Deserialize, Serialize};

/// Where the demo record set lives. The file is read once at process
/// start and shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    #[serde(default = "DatasetConfig::default_path")]
    pub path: String,
}

impl DatasetConfig {
    fn default_path() -> String {
        String::from("./data.json")
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}
