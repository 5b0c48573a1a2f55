pub mod runtime_config;

pub use runtime_config::{
    FileRuntimeConfigRepository, RuntimeConfig, RuntimeConfigRepository, RUNTIME_CONFIG_PATH,
};
