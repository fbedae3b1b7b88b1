//! Structural view over Go expression nodes
//!
//! The locators never match on source text. They classify a tree-sitter node
//! into one of the few shapes they care about and match on that.

use crate::parser::source::GoSource;

/// The expression shapes relevant to version discovery
#[derive(Debug, Clone, Copy)]
pub enum Expr<'t> {
    /// `"..."` or `` `...` ``
    StringLiteral(tree_sitter::Node<'t>),
    /// A bare name
    Identifier(&'t str),
    /// `operand.field`
    Selector {
        operand: tree_sitter::Node<'t>,
        field: &'t str,
    },
    /// `function(arguments...)`
    Call {
        function: tree_sitter::Node<'t>,
        arguments: tree_sitter::Node<'t>,
    },
    Other,
}

impl<'t> Expr<'t> {
    pub fn classify(node: tree_sitter::Node<'t>, source: &'t GoSource) -> Self {
        match node.kind() {
            "interpreted_string_literal" | "raw_string_literal" => Expr::StringLiteral(node),
            "identifier" => Expr::Identifier(source.node_text(node)),
            "selector_expression" => {
                match (
                    node.child_by_field_name("operand"),
                    node.child_by_field_name("field"),
                ) {
                    (Some(operand), Some(field)) => Expr::Selector {
                        operand,
                        field: source.node_text(field),
                    },
                    _ => Expr::Other,
                }
            }
            "call_expression" => {
                match (
                    node.child_by_field_name("function"),
                    node.child_by_field_name("arguments"),
                ) {
                    (Some(function), Some(arguments)) => Expr::Call {
                        function,
                        arguments,
                    },
                    _ => Expr::Other,
                }
            }
            "parenthesized_expression" => match node.named_child(0) {
                Some(inner) => Expr::classify(inner, source),
                None => Expr::Other,
            },
            _ => Expr::Other,
        }
    }

    /// True for `alias.field` where `alias` is a plain identifier
    pub fn is_selector_on(&self, source: &GoSource, alias: &str, field: &str) -> bool {
        match self {
            Expr::Selector {
                operand,
                field: name,
            } => {
                *name == field
                    && operand.kind() == "identifier"
                    && source.node_text(*operand) == alias
            }
            _ => false,
        }
    }

    /// For `alias.<name>(...)` returns `<name>` and the argument list
    pub fn as_qualified_call(
        &self,
        source: &'t GoSource,
        alias: &str,
    ) -> Option<(&'t str, tree_sitter::Node<'t>)> {
        let Expr::Call {
            function,
            arguments,
        } = *self
        else {
            return None;
        };
        match Expr::classify(function, source) {
            Expr::Selector { operand, field }
                if operand.kind() == "identifier" && source.node_text(operand) == alias =>
            {
                Some((field, arguments))
            }
            _ => None,
        }
    }
}

/// Named children of an `argument_list`, comments excluded
pub fn call_arguments(arguments: tree_sitter::Node<'_>) -> Vec<tree_sitter::Node<'_>> {
    let mut cursor = arguments.walk();
    arguments
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_call(source: &GoSource) -> tree_sitter::Node<'_> {
        fn find(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
            if node.kind() == "call_expression" {
                return Some(node);
            }
            let mut cursor = node.walk();
            node.named_children(&mut cursor).find_map(find)
        }
        find(source.root()).unwrap()
    }

    #[test]
    fn classify_recognizes_qualified_call() {
        let source = GoSource::parse(r#"package main; var v = version.Must(x)"#).unwrap();
        let call = Expr::classify(first_call(&source), &source);
        let (name, arguments) = call.as_qualified_call(&source, "version").unwrap();
        assert_eq!(name, "Must");
        assert_eq!(call_arguments(arguments).len(), 1);
    }

    #[test]
    fn qualified_call_requires_matching_alias() {
        let source = GoSource::parse(r#"package main; var v = other.Must(x)"#).unwrap();
        let call = Expr::classify(first_call(&source), &source);
        assert!(call.as_qualified_call(&source, "version").is_none());
    }

    #[test]
    fn selector_on_nested_operand_does_not_match() {
        let source = GoSource::parse(r#"package main; var v = a.version.Must(x)"#).unwrap();
        let call = Expr::classify(first_call(&source), &source);
        let Expr::Call { function, .. } = call else {
            panic!("expected a call");
        };
        let selector = Expr::classify(function, &source);
        assert!(!selector.is_selector_on(&source, "version", "Must"));
    }

    #[test]
    fn call_arguments_skips_comments() {
        let source =
            GoSource::parse("package main; var v = f(/* first */ \"a\", b)").unwrap();
        let Expr::Call { arguments, .. } = Expr::classify(first_call(&source), &source) else {
            panic!("expected a call");
        };
        assert_eq!(call_arguments(arguments).len(), 2);
    }
}
