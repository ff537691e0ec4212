use std::{fs, path::Path};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use ureq::{Agent, AgentBuilder};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub fn agent() -> Agent {
    AgentBuilder::new().user_agent(USER_AGENT).build()
}

pub fn fetch(url: &str) -> Result<String> {
    agent()
        .get(url)
        .call()
        .with_context(|| format!("Failed to fetch {url}"))?
        .into_string()
        .with_context(|| format!("Failed to read response from {url}"))
}

pub fn progress_bar(len: u64) -> ProgressBar {
    ProgressBar::new(len).with_style(
        ProgressStyle::with_template("[{elapsed_precise}] {human_pos}/{human_len} {percent}%")
            .expect("hardcoded"),
    )
}

/// Pretty-prints `value` to `path`, replacing whatever was there.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|x| !x.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    fs::write(path, &contents).with_context(|| format!("Failed to write {}", path.display()))
}
