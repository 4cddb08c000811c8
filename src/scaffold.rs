//! Reference site scaffolding.
//!
//! Writes a self-contained starting point for a portfolio page: an
//! `index.html` that satisfies the DOM contract and loads the wasm bundle,
//! plus the `config.toml` it embeds.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html      # Reference page with inline config + theme CSS
//! ├── config.toml     # The config embedded in index.html
//! └── pkg/            # ← put the `wasm-pack build --target web` output here
//! ```

use crate::config::SiteConfig;
use crate::markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0} already exists; pass --force to overwrite")]
    Exists(PathBuf),
    #[error("config cannot be embedded in the page: it contains `</script` or `<!--`")]
    Unembeddable,
}

/// Files written by [`scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub written: Vec<PathBuf>,
}

/// Write the reference page and its config into `output_dir`.
///
/// `config_toml` is the document embedded verbatim in the page; `config` is
/// its resolved form, used for the theme CSS. Existing files are only
/// replaced when `force` is set. A config that would break out of its
/// `<script>` element is refused before anything is written.
pub fn scaffold(
    output_dir: &Path,
    config: &SiteConfig,
    config_toml: &str,
    force: bool,
) -> Result<ScaffoldReport, ScaffoldError> {
    if !markup::embeds_in_script(config_toml) {
        return Err(ScaffoldError::Unembeddable);
    }
    let index_path = output_dir.join("index.html");
    let config_path = output_dir.join("config.toml");
    if !force {
        for path in [&index_path, &config_path] {
            if path.exists() {
                return Err(ScaffoldError::Exists(path.clone()));
            }
        }
    }

    fs::create_dir_all(output_dir)?;
    let page = markup::render_scaffold_page(config, config_toml);
    fs::write(&index_path, page.into_string())?;
    fs::write(&config_path, config_toml)?;
    log::debug!("scaffolded {}", output_dir.display());

    Ok(ScaffoldReport {
        written: vec![index_path, config_path],
    })
}
