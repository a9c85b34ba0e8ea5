//! Tree-sitter parser integration for Go
//!
//! Turns the `.go` files of one directory into packages of exported
//! function and method declarations.

use super::{PackageAnalyzer, ParsedPackage};
use crate::core::{Declaration, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Node, Parser, Tree};

const GO_EXTENSION: &str = "go";

/// A parsed Go source file.
pub struct GoAst {
    pub tree: Tree,
    pub path: PathBuf,
    pub source: String,
}

/// Exported declarations found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    pub package: String,
    pub declarations: Vec<Declaration>,
    /// Any exported top-level identifier, not only functions.
    pub has_exports: bool,
}

/// Reusable Go parser.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_go::LANGUAGE.into();
        parser.set_language(&language)?;
        Ok(Self { parser })
    }

    /// Parse Go source code into a tree-sitter AST, rejecting trees with
    /// syntax errors.
    pub fn parse_source(&mut self, content: &str, path: &Path) -> Result<GoAst> {
        let dir = path.parent().unwrap_or(Path::new(""));
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(dir, path, 1, 1, "parser produced no tree"))?;

        if let Some(node) = first_error(tree.root_node()) {
            let message = if node.is_missing() {
                format!("expected {}", node.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(Error::parse(dir, path, node_line(&node), node_column(&node), message));
        }

        Ok(GoAst {
            tree,
            path: path.to_path_buf(),
            source: content.to_string(),
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<GoFile> {
        let content = fs::read_to_string(path).map_err(|e| Error::file_system(path, e))?;
        let ast = self.parse_source(&content, path)?;
        extract_file(&ast)
    }
}

impl PackageAnalyzer for GoParser {
    /// Parse every `.go` file directly inside `dir`, in file-name order, and
    /// group the results by package name in order of first appearance.
    fn parse_directory(&mut self, dir: &Path) -> Result<Vec<ParsedPackage>> {
        let mut packages: Vec<ParsedPackage> = Vec::new();

        for path in go_files(dir)? {
            let file = self.parse_file(&path)?;
            log::debug!(
                "Parsed {} (package {}, {} exported functions)",
                path.display(),
                file.package,
                file.declarations.len()
            );

            match packages.iter_mut().find(|p| p.name == file.package) {
                Some(package) => {
                    package.declarations.extend(file.declarations);
                    package.has_exports |= file.has_exports;
                }
                None => packages.push(ParsedPackage {
                    name: file.package,
                    declarations: file.declarations,
                    has_exports: file.has_exports,
                }),
            }
        }

        Ok(packages)
    }
}

/// List the Go files directly inside `dir`, sorted by name.
pub fn go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::file_system(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::file_system(dir, e))?.path();
        let is_go = path.extension().is_some_and(|ext| ext == GO_EXTENSION);
        if is_go && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Pull the package name and the exported declarations out of a parsed file.
pub fn extract_file(ast: &GoAst) -> Result<GoFile> {
    let root = ast.tree.root_node();
    let mut package = None;
    let mut declarations = Vec::new();
    let mut has_exports = false;

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => {
                package = first_child_of_kind(&node, "package_identifier")
                    .map(|id| node_text(&id, &ast.source).to_string());
            }
            "function_declaration" | "method_declaration" => {
                let Some(name) = node.child_by_field_name("name") else {
                    continue;
                };
                let name = node_text(&name, &ast.source);
                if is_exported(name) {
                    has_exports = true;
                    declarations.push(Declaration::new(name, position(&ast.path, &node)));
                }
            }
            "type_declaration" | "const_declaration" | "var_declaration" => {
                has_exports |= spec_names(&node, &ast.source).into_iter().any(is_exported);
            }
            _ => {}
        }
    }

    let package = package.ok_or_else(|| {
        let dir = ast.path.parent().unwrap_or(Path::new(""));
        Error::parse(dir, &ast.path, 1, 1, "missing package clause")
    })?;

    Ok(GoFile {
        package,
        declarations,
        has_exports,
    })
}

/// Go's export rule: the first character is upper-case.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// `path:line:column`, 1-based, column counted in bytes.
fn position(path: &Path, node: &Node) -> String {
    format!("{}:{}:{}", path.display(), node_line(node), node_column(node))
}

/// Declared names of a type, const or var declaration, including grouped
/// `( ... )` forms.
fn spec_names<'a>(node: &Node, source: &'a str) -> Vec<&'a str> {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let kind = child.kind();
        if kind.ends_with("_spec") || kind == "type_alias" {
            let mut field_cursor = child.walk();
            names.extend(
                child
                    .children_by_field_name("name", &mut field_cursor)
                    .map(|n| node_text(&n, source)),
            );
        } else if kind.ends_with("_list") {
            names.extend(spec_names(&child, source));
        }
    }
    names
}

fn first_child_of_kind<'tree>(node: &Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Locate the first error or missing node below `node`.
fn first_error(node: Node) -> Option<Node> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(first_error)
        .or(Some(node))
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
