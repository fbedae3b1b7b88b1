//! Top-level `const` / `var` lookup table

use std::collections::HashMap;

use crate::parser::expr::call_arguments;
use crate::parser::source::GoSource;
use crate::parser::types::{Declaration, DeclarationKind, Span};

/// Declarations of one file indexed by name
pub struct DeclarationTable<'t> {
    by_name: HashMap<&'t str, Vec<Declaration<'t>>>,
}

impl<'t> DeclarationTable<'t> {
    /// Build the table from the file's top-level declarations.
    /// Declarations inside function bodies are not collected.
    pub fn build(source: &'t GoSource) -> Self {
        let mut by_name: HashMap<&'t str, Vec<Declaration<'t>>> = HashMap::new();
        let root = source.root();
        let mut cursor = root.walk();

        for child in root.named_children(&mut cursor) {
            let kind = match child.kind() {
                "const_declaration" => DeclarationKind::Const,
                "var_declaration" => DeclarationKind::Var,
                _ => continue,
            };
            let mut specs = Vec::new();
            collect_specs(child, &mut specs);
            // an empty const spec repeats the previous value list of its group
            let mut previous_values = Vec::new();
            for spec in specs {
                let values = match spec_values(spec) {
                    Some(values) => values,
                    None if kind == DeclarationKind::Const
                        && spec.child_by_field_name("type").is_none() =>
                    {
                        previous_values.clone()
                    }
                    None => Vec::new(),
                };
                for (name, declaration) in spec_declarations(spec, kind, &values, source) {
                    by_name.entry(name).or_default().push(declaration);
                }
                previous_values = values;
            }
        }

        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> &[Declaration<'t>] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn collect_specs<'t>(node: tree_sitter::Node<'t>, specs: &mut Vec<tree_sitter::Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "const_spec" | "var_spec" => specs.push(child),
            "var_spec_list" => collect_specs(child, specs),
            _ => {}
        }
    }
}

fn spec_values(spec: tree_sitter::Node<'_>) -> Option<Vec<tree_sitter::Node<'_>>> {
    spec.child_by_field_name("value").map(|list| {
        if list.kind() == "expression_list" {
            call_arguments(list)
        } else {
            vec![list]
        }
    })
}

/// Pair the names of `a, b = x, y` with their initializers by position
fn spec_declarations<'t>(
    spec: tree_sitter::Node<'t>,
    kind: DeclarationKind,
    values: &[tree_sitter::Node<'t>],
    source: &'t GoSource,
) -> Vec<(&'t str, Declaration<'t>)> {
    let mut cursor = spec.walk();
    let names: Vec<_> = spec
        .children_by_field_name("name", &mut cursor)
        .filter(|n| n.kind() == "identifier")
        .collect();

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            (
                source.node_text(name),
                Declaration {
                    kind,
                    name_span: Span::of(name),
                    initializer: values.get(i).copied(),
                },
            )
        })
        .collect()
}
