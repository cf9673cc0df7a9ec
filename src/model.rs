use std::fmt;
use std::path;

use anyhow::Context as _;
use kstring::KString;

use viridian_config::Page;
use viridian_config::RelPath;
use viridian_config::Theme;

/// The configuration the build actually runs with: documented defaults
/// filled in, paths resolved against the project root, record validated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    pub project_root: path::PathBuf,
    pub title: KString,
    pub root: path::PathBuf,
    pub theme: Theme,
    /// `None` means the sidebar lists discovered pages alphabetically.
    pub pages: Option<Vec<Page>>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub sidebar: bool,
    pub toc: bool,
    pub pager: bool,
    pub output: path::PathBuf,
    pub search: bool,
    pub linkify: bool,
    pub typographer: bool,
    pub clean_urls: bool,
}

impl Config {
    pub fn from_config(config: viridian_config::Config) -> anyhow::Result<Self> {
        let viridian_config::Config {
            project_root,
            title,
            root,
            theme,
            pages,
            header,
            footer,
            sidebar,
            toc,
            pager,
            output,
            search,
            linkify,
            typographer,
            clean_urls,
        } = config;

        let title = title.unwrap_or_default();
        anyhow::ensure!(!title.is_empty(), "`title` must be set and non-empty");

        let root_rel = root.unwrap_or_else(|| RelPath::from_unchecked("src"));
        anyhow::ensure!(!root_rel.is_empty(), "`root` must not be empty");
        let output_rel = output.unwrap_or_else(|| RelPath::from_unchecked("dist"));
        anyhow::ensure!(!output_rel.is_empty(), "`output` must not be empty");

        let project_root = dunce::canonicalize(&project_root).with_context(|| {
            format!("failed to resolve project root `{}`", project_root.display())
        })?;
        let root = root_rel.to_path(&project_root);
        anyhow::ensure!(
            root.is_dir(),
            "`root` must name an existing directory, `{}` does not",
            root.display()
        );
        let output = output_rel.to_path(&project_root);

        if let Some(pages) = pages.as_deref() {
            for (index, page) in pages.iter().enumerate() {
                anyhow::ensure!(
                    !page.name.is_empty(),
                    "`pages[{index}]` must have a non-empty `name`"
                );
                anyhow::ensure!(
                    !page.path.is_empty(),
                    "`pages[{index}]` (`{}`) must have a non-empty `path`",
                    page.name
                );
            }
        }

        Ok(Self {
            project_root,
            title,
            root,
            theme: theme.unwrap_or_default(),
            pages,
            header,
            footer,
            sidebar: sidebar.unwrap_or(true),
            toc: toc.unwrap_or(true),
            pager: pager.unwrap_or(true),
            output,
            search: search.unwrap_or(false),
            linkify: linkify.unwrap_or(true),
            typographer: typographer.unwrap_or(false),
            clean_urls: clean_urls.unwrap_or(true),
        })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn project(source_dir: Option<&str>) -> (tempfile::TempDir, viridian_config::Config) {
        let temp = tempfile::tempdir().unwrap();
        if let Some(source_dir) = source_dir {
            std::fs::create_dir_all(temp.path().join(source_dir)).unwrap();
        }
        let raw = viridian_config::Config {
            project_root: temp.path().to_path_buf(),
            title: Some("Example Site".into()),
            ..Default::default()
        };
        (temp, raw)
    }

    #[test]
    fn defaults_applied() {
        let (temp, raw) = project(Some("src"));
        let config = Config::from_config(raw).unwrap();

        let project_root = dunce::canonicalize(temp.path()).unwrap();
        assert_eq!(config.root, project_root.join("src"));
        assert_eq!(config.output, project_root.join("dist"));
        assert_eq!(config.theme, Theme::Default);
        assert_eq!(config.pages, None);
        assert_eq!(config.header, None);
        assert_eq!(config.footer, None);
        assert!(config.sidebar);
        assert!(config.toc);
        assert!(config.pager);
        assert!(!config.search);
        assert!(config.linkify);
        assert!(!config.typographer);
        assert!(config.clean_urls);
    }

    #[test]
    fn explicit_values_kept() {
        let (temp, mut raw) = project(Some("content"));
        raw.root = Some(RelPath::from_unchecked("content"));
        raw.output = Some(RelPath::from_unchecked("public"));
        raw.theme = Some(Theme::Slate);
        raw.toc = Some(false);
        raw.search = Some(true);
        raw.footer = Some("Built with viridian.".to_owned());
        let config = Config::from_config(raw).unwrap();

        let project_root = dunce::canonicalize(temp.path()).unwrap();
        assert_eq!(config.root, project_root.join("content"));
        assert_eq!(config.output, project_root.join("public"));
        assert_eq!(config.theme, Theme::Slate);
        assert!(!config.toc);
        assert!(config.search);
        assert_eq!(config.footer.as_deref(), Some("Built with viridian."));
    }

    #[test]
    fn title_is_required() {
        let (_temp, mut raw) = project(Some("src"));
        raw.title = None;
        let err = Config::from_config(raw).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn empty_title_is_rejected() {
        let (_temp, mut raw) = project(Some("src"));
        raw.title = Some("".into());
        let err = Config::from_config(raw).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn missing_source_root_is_rejected() {
        let (_temp, raw) = project(None);
        let err = Config::from_config(raw).unwrap_err();
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn page_order_is_preserved() {
        let (_temp, mut raw) = project(Some("src"));
        raw.pages = Some(vec![
            Page::new("Zoos", "zoos"),
            Page::new("Aquariums", "aquariums"),
            Page::new("Menageries", "menageries"),
        ]);
        let config = Config::from_config(raw).unwrap();
        let actual: Vec<&str> = config
            .pages
            .as_deref()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(actual, ["Zoos", "Aquariums", "Menageries"]);
    }

    #[test]
    fn empty_page_fields_are_rejected() {
        let (_temp, mut raw) = project(Some("src"));
        raw.pages = Some(vec![Page::new("Zoos", "")]);
        let err = Config::from_config(raw).unwrap_err();
        assert!(err.to_string().contains("pages[0]"));
    }

    #[test]
    fn display_is_yaml() {
        let (_temp, raw) = project(Some("src"));
        let config = Config::from_config(raw).unwrap();
        snapbox::assert_data_eq!(
            config.to_string(),
            snapbox::str![[r#"
project_root: [..]
title: Example Site
root: [..]src
theme: default
pages: null
header: null
footer: null
sidebar: true
toc: true
pager: true
output: [..]dist
search: false
linkify: true
typographer: false
clean_urls: true

"#]]
        );
    }
}
