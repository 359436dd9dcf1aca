use alert_actions_core::{config::Config, data::DataSet, io, paths};
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing alert actions in: {}", root.display());

    let dir = paths::actions_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config = serde_yaml::to_string(&Config::new())?;
    let created = io::write_if_missing(&paths::config_path(root), config.as_bytes())
        .context("failed to write config.yaml")?;
    report(paths::CONFIG_FILE, created);

    let data = serde_yaml::to_string(&DataSet::default())?;
    let created = io::write_if_missing(&paths::data_path(root), data.as_bytes())
        .context("failed to write data.yaml")?;
    report(paths::DATA_FILE, created);

    Ok(())
}

fn report(file: &str, created: bool) {
    if created {
        println!("  created: {file}");
    } else {
        println!("  exists:  {file}");
    }
}
