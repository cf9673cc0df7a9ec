use std::fmt;
use std::path;

use kstring::KString;

use super::*;

pub const CONFIG_FILE: &str = "_viridian.yml";

/// The site configuration record, exactly as authored.
///
/// Every optional setting stays `None` when the author omitted it, so a
/// record round-trips through serialization without inventing values.  The
/// documented defaults are applied by the generator, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    /// Directory the config file was found in.
    #[serde(skip)]
    pub project_root: path::PathBuf,
    /// Display name for the site, used in the sidebar and page titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<KString>,
    /// Source content root, relative to the project root.  Defaults to `src`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Explicit sidebar entries.  When unset, the generator lists discovered
    /// pages alphabetically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
    /// HTML injected at the top of every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// HTML injected at the bottom of every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<bool>,
    /// Build destination, relative to the project root.  Defaults to `dist`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<RelPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    /// Convert bare URLs in content into links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkify: Option<bool>,
    /// Smart quotes and other typographic substitutions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typographer: Option<bool>,
    /// Drop `.html` from generated URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_urls: Option<bool>,
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut project_root = path;
        project_root.pop(); // Remove filename
        if project_root == path::Path::new("") {
            project_root = path::Path::new(".").to_owned();
        }
        config.project_root = project_root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILE} file found in current directory, using default config."
                );
                let config = Config {
                    project_root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
