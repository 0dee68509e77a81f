use serde::Serialize;

use crate::models::SourceLocation;
use crate::view::history_uri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub name: String,
    pub href: Option<String>,
}

/// Which parts of the location to show, and the terminal view name.
#[derive(Debug, Clone, Copy)]
pub struct CrumbSpec<'a> {
    pub branch: bool,
    pub path: bool,
    pub view: &'a str,
}

pub fn build_crumbs(location: &SourceLocation, spec: CrumbSpec<'_>) -> Vec<Crumb> {
    let repository = location.repository();
    let branch = location.branch();
    let mut crumbs = vec![Crumb {
        name: repository.to_string(),
        href: Some(history_uri(repository, branch, None)),
    }];

    if spec.branch {
        if let Some(branch) = branch {
            crumbs.push(Crumb {
                name: branch.to_string(),
                href: Some(history_uri(repository, Some(branch), None)),
            });
        }
    }

    if spec.path {
        let mut prefix = String::new();
        for component in location.path_components() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(component);
            crumbs.push(Crumb {
                name: component.to_string(),
                href: Some(history_uri(repository, branch, Some(&prefix))),
            });
        }
    }

    crumbs.push(Crumb {
        name: spec.view.to_string(),
        href: None,
    });

    crumbs
}
