use std::path::Path;

use anyhow::{Result, bail};
use sitehead_core::SiteDefaults;
use sitehead_core::config::load_site_defaults;

pub const CONFIG_FILE: &str = "site.yaml";

pub fn load_defaults_for_site(root: &Path) -> Result<SiteDefaults> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        bail!(
            "Missing {CONFIG_FILE} in {}. It needs a `site` section with name, origin and description.",
            root.display()
        );
    }
    load_site_defaults(&config_path)
}
