//! Locating the installed template root.
//!
//! Candidates, first usable one wins:
//! 1. An explicitly configured root (`templates.root` / `NPR_TEMPLATE_DIR`)
//! 2. `<exe_dir>/../share/npr/templates` (system or Homebrew style install)
//! 3. `<exe_dir>/templates` (portable archive)
//! 4. The per-user data directory, populated from the templates embedded in
//!    the binary when it is missing
//!
//! A candidate is usable when it is a directory containing `project/`.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use rust_embed::RustEmbed;
use tracing::{debug, info};

/// Templates shipped inside the binary
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates/"]
struct EmbeddedTemplates;

/// Subdirectory of the template root holding the project metadata templates
pub const PROJECT_TEMPLATE_DIR: &str = "project";

/// Resolve the template root for this installation.
///
/// `configured` is an explicit root from configuration. When it is set it is
/// the only candidate considered.
pub fn resolve_installed_template_root(configured: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    TemplateRootResolver::from_environment(configured).resolve()
}

/// Template root lookup over an explicit set of locations
#[derive(Debug, Clone, Default)]
pub struct TemplateRootResolver {
    configured: Option<Utf8PathBuf>,
    exe_dir: Option<Utf8PathBuf>,
    data_dir: Option<Utf8PathBuf>,
}

impl TemplateRootResolver {
    /// Resolver using the running executable's location and the user data directory
    pub fn from_environment(configured: Option<&Utf8Path>) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok());

        let data_dir = ProjectDirs::from("", "", "npr")
            .and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf()).ok());

        Self {
            configured: configured.map(Utf8Path::to_path_buf),
            exe_dir,
            data_dir,
        }
    }

    pub fn with_configured(mut self, root: impl Into<Utf8PathBuf>) -> Self {
        self.configured = Some(root.into());
        self
    }

    pub fn with_exe_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.exe_dir = Some(dir.into());
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Find the first usable template root
    pub fn resolve(&self) -> Result<Utf8PathBuf> {
        if let Some(root) = &self.configured {
            if is_template_root(root) {
                debug!("Using configured template root: {}", root);
                return Ok(root.clone());
            }
            return Err(Error::TemplatesMissing {
                searched: root.to_string(),
            });
        }

        let mut searched = Vec::new();

        if let Some(exe_dir) = &self.exe_dir {
            for candidate in [
                exe_dir.join("../share/npr/templates"),
                exe_dir.join("templates"),
            ] {
                if is_template_root(&candidate) {
                    debug!("Using installed template root: {}", candidate);
                    return Ok(candidate);
                }
                searched.push(candidate.to_string());
            }
        }

        if let Some(data_dir) = &self.data_dir {
            let candidate = data_dir
                .join("templates")
                .join(env!("CARGO_PKG_VERSION"));
            if !is_template_root(&candidate) {
                materialize_embedded(&candidate)?;
            }
            if is_template_root(&candidate) {
                debug!("Using embedded template root: {}", candidate);
                return Ok(candidate);
            }
            searched.push(candidate.to_string());
        }

        Err(Error::TemplatesMissing {
            searched: if searched.is_empty() {
                "no candidate locations".to_string()
            } else {
                searched.join(", ")
            },
        })
    }
}

fn is_template_root(dir: &Utf8Path) -> bool {
    dir.join(PROJECT_TEMPLATE_DIR).is_dir()
}

/// Write the embedded templates under `target`
fn materialize_embedded(target: &Utf8Path) -> Result<()> {
    info!("Extracting bundled templates to {}", target);

    for file in EmbeddedTemplates::iter() {
        let Some(content) = EmbeddedTemplates::get(&file) else {
            continue;
        };
        let path = target.join(file.as_ref());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| Error::file_write(parent.as_str(), source))?;
        }
        std::fs::write(&path, content.data.as_ref())
            .map_err(|source| Error::file_write(path.as_str(), source))?;
    }

    Ok(())
}
