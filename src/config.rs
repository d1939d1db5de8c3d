use crate::domain::allow_list::AllowList;
use crate::error::{Result, WalletError};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Where the registered phone numbers come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowListSource {
    /// The table compiled into the binary.
    #[default]
    BuiltIn,
    /// A JSON file holding an array of phone-number strings.
    File(PathBuf),
}

/// Start-up configuration of the service.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub allow_list: AllowListSource,
}

impl Config {
    pub fn new(allow_list: Option<PathBuf>) -> Self {
        Self {
            allow_list: allow_list.map_or(AllowListSource::BuiltIn, AllowListSource::File),
        }
    }

    /// Builds the allow-list described by this configuration.
    pub fn load_allow_list(&self) -> Result<AllowList> {
        match &self.allow_list {
            AllowListSource::BuiltIn => Ok(AllowList::default()),
            AllowListSource::File(path) => {
                let file = File::open(path)?;
                let numbers: Vec<String> = serde_json::from_reader(BufReader::new(file))?;
                if numbers.is_empty() {
                    return Err(WalletError::Config(format!(
                        "allow-list {} contains no phone numbers",
                        path.display()
                    )));
                }
                Ok(AllowList::new(numbers))
            }
        }
    }
}
