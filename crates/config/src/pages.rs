use kstring::KString;

/// An explicit sidebar entry.
///
/// When a config lists `pages`, the sidebar shows exactly these entries in
/// exactly this order.  When it doesn't, the generator falls back to an
/// alphabetical listing of the content files it discovers under the source
/// root.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Page {
    /// Label shown in the sidebar.
    pub name: KString,
    /// Site path of the page, relative to the site root.
    pub path: KString,
}

impl Page {
    pub fn new<N: Into<KString>, P: Into<KString>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn order_is_preserved() {
        let pages: Vec<Page> = serde_yaml::from_str(
            "
- name: Zoos
  path: zoos
- name: Aquariums
  path: aquariums
- name: Menageries
  path: menageries
",
        )
        .unwrap();
        let actual: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(actual, ["Zoos", "Aquariums", "Menageries"]);
    }

    #[test]
    fn name_is_required() {
        let result: Result<Page, _> = serde_yaml::from_str("path: zoos");
        assert!(result.is_err());
    }

    #[test]
    fn path_is_required() {
        let result: Result<Page, _> = serde_yaml::from_str("name: Zoos");
        assert!(result.is_err());
    }
}
