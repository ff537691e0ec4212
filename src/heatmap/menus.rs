use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{MenuRecord, Region};

/// A menu file that exists but could not be used.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu for store {store}: {source}")]
    Read {
        store: String,
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse menu for store {store}: {source}")]
    Parse {
        store: String,
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl MenuError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

pub fn menu_path(dir: &Path, region: Region, store: &str) -> PathBuf {
    dir.join(format!("{}_{store}_menu.json", region.prefix()))
}

/// Loads a store's menu. A missing file is `Ok(None)`.
pub fn load(path: &Path, store: &str) -> Result<Option<MenuRecord>, MenuError> {
    let text = match read_to_string(path) {
        Ok(x) => x,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(MenuError::Read {
                store: store.to_string(),
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| MenuError::Parse {
            store: store.to_string(),
            path: path.to_path_buf(),
            source,
        })
}
