use adstore::StoreConfig;

/// Store configuration for the page's origin.
pub fn store_config() -> StoreConfig {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .map(|hostname| StoreConfig::for_hostname(&hostname))
        .unwrap_or_default()
}
