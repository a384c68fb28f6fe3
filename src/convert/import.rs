// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Node2json-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of node2json and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Import statements for the title code block.
//!
//! Whether a module is importable from the library package is decided by an injected
//! [`ModuleResolver`], so statement construction itself stays a pure function.

use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Answers whether a dotted module path (e.g. `nipype.interfaces.fsl`) can be imported.
pub trait ModuleResolver {
    fn resolves(&self, dotted: &str) -> bool;
}

impl<F> ModuleResolver for F
where
    F: Fn(&str) -> bool,
{
    fn resolves(&self, dotted: &str) -> bool {
        self(dotted)
    }
}

/// Resolves exactly the modules it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownModules {
    modules: BTreeSet<String>,
}

impl KnownModules {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { modules: modules.into_iter().map(Into::into).collect() }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for KnownModules {
    fn resolves(&self, dotted: &str) -> bool {
        self.modules.contains(dotted)
    }
}

/// Resolves modules by looking for their source below a package root (a `site-packages`
/// directory or a source checkout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDirResolver {
    root: PathBuf,
}

impl PackageDirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ModuleResolver for PackageDirResolver {
    fn resolves(&self, dotted: &str) -> bool {
        if dotted.is_empty() || dotted.split('.').any(str::is_empty) {
            return false;
        }
        let mut path = self.root.clone();
        path.extend(dotted.split('.'));
        path.join("__init__.py").is_file() || path.with_extension("py").is_file()
    }
}

pub(crate) enum ImportStatement {
    Package(String),
    PathAppend(String),
}

impl ImportStatement {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Package(s) | Self::PathAppend(s) => s,
        }
    }
}

pub(crate) fn package_import(package: &str, module: &str) -> String {
    let alias = module.rsplit('.').next().unwrap_or(module);
    format!("import {package}.{module} as {alias}")
}

pub(crate) fn path_append_import(module_dir: &Path, module: &str) -> String {
    format!("sys.path.append('{}')\nimport {module}", module_dir.display())
}

/// Builds the import statement, falling back to a `sys.path` append when the module is not
/// part of the package. `Ok(None)` means the fallback was needed but no module path is known.
pub(crate) fn import_statement(
    resolver: &dyn ModuleResolver,
    package: &str,
    module: &str,
    module_path: Option<&Path>,
) -> io::Result<Option<ImportStatement>> {
    if resolver.resolves(&format!("{package}.{module}")) {
        return Ok(Some(ImportStatement::Package(package_import(package, module))));
    }
    let Some(module_path) = module_path else {
        return Ok(None);
    };
    let dir = absolute_parent(module_path)?;
    Ok(Some(ImportStatement::PathAppend(path_append_import(&dir, module))))
}

/// Absolute, lexically normalized directory containing `path`.
pub fn absolute_parent(path: &Path) -> io::Result<PathBuf> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let joined = if parent.is_absolute() {
        parent.to_path_buf()
    } else {
        std::env::current_dir()?.join(parent)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        absolute_parent, import_statement, normalize, KnownModules, ModuleResolver,
        PackageDirResolver,
    };

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
            let mut path = std::env::temp_dir();
            path.push(format!("node2json-{prefix}-{}-{nanos}", std::process::id()));
            fs::create_dir_all(&path).unwrap();
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn default_known_modules_resolve_nothing() {
        let resolver = KnownModules::default();
        assert!(resolver.is_empty());
        assert!(!resolver.resolves("nipype.interfaces.fsl"));
        assert!(!KnownModules::new(["nipype.interfaces.fsl"]).is_empty());
    }

    #[test]
    fn resolvable_module_imports_from_package() {
        let resolver = KnownModules::new(["nipype.interfaces.fsl"]);
        let statement = import_statement(&resolver, "nipype", "interfaces.fsl", None)
            .expect("io")
            .expect("statement")
            .into_string();
        assert_eq!(statement, "import nipype.interfaces.fsl as fsl");
    }

    #[test]
    fn unresolvable_module_appends_search_path() {
        let resolver = |_: &str| false;
        let module_path = Path::new("/work/nodes/filters.py");
        let statement = import_statement(&resolver, "nipype", "filters", Some(module_path))
            .expect("io")
            .expect("statement")
            .into_string();
        assert_eq!(statement, "sys.path.append('/work/nodes')\nimport filters");
    }

    #[test]
    fn unresolvable_module_without_path_has_no_statement() {
        let resolver = |_: &str| false;
        let statement = import_statement(&resolver, "nipype", "filters", None).expect("io");
        assert!(statement.is_none());
    }

    #[test]
    fn relative_module_path_is_made_absolute() {
        let dir = absolute_parent(Path::new("nodes/./sub/../filters.py")).expect("cwd");
        let expected = std::env::current_dir().expect("cwd").join("nodes");
        assert_eq!(dir, normalize(&expected));

        let dir = absolute_parent(Path::new("filters.py")).expect("cwd");
        assert_eq!(dir, normalize(&std::env::current_dir().expect("cwd")));
    }

    #[test]
    fn package_dir_resolver_probes_packages_and_modules() {
        let tmp = TempDir::new("resolver");
        let fsl = tmp.path.join("nipype").join("interfaces").join("fsl");
        fs::create_dir_all(&fsl).unwrap();
        fs::write(fsl.join("__init__.py"), "").unwrap();
        fs::write(tmp.path.join("nipype").join("interfaces").join("io.py"), "").unwrap();

        let resolver = PackageDirResolver::new(&tmp.path);
        assert_eq!(resolver.root(), tmp.path.as_path());
        assert!(resolver.resolves("nipype.interfaces.fsl"));
        assert!(resolver.resolves("nipype.interfaces.io"));
        assert!(!resolver.resolves("nipype.interfaces.afni"));
        assert!(!resolver.resolves("nipype..fsl"));
        assert!(!resolver.resolves(""));
    }
}
