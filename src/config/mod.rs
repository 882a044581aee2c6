mod manager;

pub use manager::{
    ConfigFile, ConfigManager, MozhiConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
