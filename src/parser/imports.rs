//! Import resolution
//!
//! Finds the import spec of the versioning library and the name the file
//! refers to it by:
//! - `import "github.com/hashicorp/go-version"` binds `version`
//! - `import gv "github.com/hashicorp/go-version"` binds `gv`
//! - dot and blank imports are rejected

use tracing::debug;

use crate::config::LibraryConfig;
use crate::error::BumpError;
use crate::parser::literal::unquote;
use crate::parser::source::GoSource;
use crate::parser::types::ImportBinding;

/// Resolve the local alias of `library` in `source`
pub fn resolve_import(
    source: &GoSource,
    library: &LibraryConfig,
) -> Result<ImportBinding, BumpError> {
    let root = source.root();
    let mut specs = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "import_declaration" {
            collect_import_specs(child, &mut specs);
        }
    }

    let mut found: Option<ImportBinding> = None;
    for spec in specs {
        let Some(path_node) = spec.child_by_field_name("path") else {
            continue;
        };
        let Ok(path) = unquote(source.node_text(path_node)) else {
            continue;
        };
        if path != library.import_path {
            continue;
        }
        if found.is_some() {
            return Err(BumpError::DuplicateImport { path });
        }

        let binding = match spec.child_by_field_name("name") {
            Some(name) if name.kind() == "dot" => {
                return Err(BumpError::UnsupportedImport { path, form: "dot" });
            }
            Some(name) if name.kind() == "blank_identifier" => {
                return Err(BumpError::UnsupportedImport { path, form: "blank" });
            }
            Some(name) => ImportBinding {
                canonical_path: path,
                local_alias: source.node_text(name).to_string(),
                explicit: true,
            },
            None => ImportBinding {
                canonical_path: path,
                local_alias: library.default_alias(),
                explicit: false,
            },
        };
        found = Some(binding);
    }

    let binding = found.ok_or_else(|| BumpError::ImportNotFound {
        path: library.import_path.clone(),
    })?;
    debug!(
        path = %binding.canonical_path,
        alias = %binding.local_alias,
        explicit = binding.explicit,
        "Resolved import"
    );
    Ok(binding)
}

fn collect_import_specs<'t>(node: tree_sitter::Node<'t>, specs: &mut Vec<tree_sitter::Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => specs.push(child),
            "import_spec_list" => collect_import_specs(child, specs),
            _ => {}
        }
    }
}
