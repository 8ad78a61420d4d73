//! Box-drawing rendering of syntax trees.

use crate::parser::tree::SyntaxTree;

/// Render `root` as an indented box-drawing tree, one `<value>` per node.
pub fn render_tree(root: &SyntaxTree) -> String {
    let mut out = String::new();
    render_node(root, "", true, &mut out);
    out
}

fn render_node(node: &SyntaxTree, prefix: &str, is_last: bool, out: &mut String) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push('<');
    out.push_str(node.label());
    out.push_str(">\n");

    let children = node.children();
    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    for (i, child) in children.iter().enumerate() {
        render_node(child, &child_prefix, i == children.len() - 1, out);
    }
}
