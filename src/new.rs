use std::fs;
use std::io::Write as _;
use std::path;

use anyhow::Context as _;

const VIRIDIAN_YML: &str = "# The site title, shown in the sidebar and page titles.
title: My Site

# The pages and sections shown in the sidebar, in order. If you don't
# specify this option, all pages will be listed alphabetically.
# pages:
#   - name: Overview
#     path: index
#   - name: Reference
#     path: reference

# The path to the source root.
root: src

# Some additional settings and their defaults:
theme: default # try `light`, `dark`, `slate`, etc
# header: \"\" # HTML to show at the top of every page
# footer: \"\" # HTML to show at the bottom of every page
# sidebar: true # whether to show the sidebar
# toc: true # whether to show the table of contents
# pager: true # whether to show previous & next links in the footer
# output: dist # path to the output root for builds
# search: false # whether to generate a search index
# linkify: true # whether to turn bare URLs into links
# typographer: false # whether to apply smart quotes and other typography
# clean_urls: true # whether to drop `.html` from generated URLs
";

const INDEX_MD: &str = "# My Site

Welcome to your new viridian site.

Add pages next to this one and list them under `pages` in `_viridian.yml`
to control the sidebar, or leave `pages` unset to list them alphabetically.
";

pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> anyhow::Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> anyhow::Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create `{}`", dest.display()))?;

    create_file(&dest.join(viridian_config::CONFIG_FILE), VIRIDIAN_YML)?;

    let source = dest.join("src");
    fs::create_dir_all(&source)
        .with_context(|| format!("failed to create `{}`", source.display()))?;
    create_file(&source.join("index.md"), INDEX_MD)?;

    Ok(())
}

fn create_file(path: &path::Path, content: &str) -> anyhow::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("failed to create `{}`", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}
