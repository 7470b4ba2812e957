//! Text renderings for inspecting a graph by eye.

use std::collections::HashMap;
use std::fmt;

use super::adjacency::Graph;
use super::edge::Node;

/// A node's `Debug` text without surrounding quotes, so string and numeric
/// labels both read naturally.
fn label<T: fmt::Debug>(node: &T) -> String {
    let text = format!("{node:?}");
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or(text)
}

/// Whether `text` is a plain identifier or an unsigned integer.
fn is_bare(text: &str) -> bool {
    let numeric = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit());
    let ident = text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    numeric || ident
}

/// Graphviz node id: bare labels as they are, anything else double-quoted.
fn dot_id<T: fmt::Debug>(node: &T) -> String {
    let text = label(node);
    if is_bare(&text) {
        return text;
    }
    // String labels already come back quoted and escaped from `Debug`.
    let raw = format!("{node:?}");
    if raw.starts_with('"') {
        raw
    } else {
        format!("\"{}\"", raw.replace('"', "\\\""))
    }
}

/// Mermaid ids cannot be quoted, so non-bare nodes get a positional id and
/// carry their text as a `["..."]` label.
fn mermaid_ids<'a, T>(nodes: impl Iterator<Item = &'a T>) -> HashMap<&'a T, String>
where
    T: Node + 'a,
{
    nodes
        .enumerate()
        .map(|(index, node)| {
            let text = label(node);
            let id = if is_bare(&text) {
                text
            } else {
                let escaped = text.replace("\\\"", "#quot;").replace('"', "#quot;");
                format!("n{index}[\"{escaped}\"]")
            };
            (node, id)
        })
        .collect()
}

impl<T> Graph<T>
where
    T: Node,
{
    /// Nodes that no edge touches.
    fn isolated(&self) -> impl Iterator<Item = &T> {
        self.nodes
            .iter()
            .filter(|node| self.out_adj.get(node).is_none() && self.in_adj.get(node).is_none())
    }

    /// Graphviz description, one edge per line.
    pub fn dot(&self) -> String {
        let (kind, connector) = if self.directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut lines = Vec::with_capacity(self.weights.len() + 2);
        lines.push(format!("{kind} g {{"));
        for (from, to) in self.weights.keys() {
            lines.push(format!("    {}{connector}{};", dot_id(from), dot_id(to)));
        }
        for node in self.isolated() {
            lines.push(format!("    {};", dot_id(node)));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Mermaid flowchart description, one edge per line.
    pub fn mermaid(&self) -> String {
        let connector = if self.directed { "-->" } else { "---" };
        let ids = mermaid_ids(self.nodes.iter());

        let mut lines = Vec::with_capacity(self.weights.len() + 1);
        lines.push("graph TD;".to_string());
        for (from, to) in self.weights.keys() {
            lines.push(format!("    {}{connector}{};", ids[from], ids[to]));
        }
        for node in self.isolated() {
            lines.push(format!("    {};", ids[node]));
        }
        lines.join("\n")
    }
}

impl<T> fmt::Display for Graph<T>
where
    T: Node,
{
    /// `(a, b, c):{a->b, b->c}`, with `--` for undirected edges.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connector = if self.directed { "->" } else { "--" };

        let nodes: Vec<String> = self.nodes.iter().map(label).collect();
        let edges: Vec<String> = self
            .weights
            .keys()
            .map(|(from, to)| format!("{}{connector}{}", label(from), label(to)))
            .collect();
        write!(f, "({}):{{{}}}", nodes.join(", "), edges.join(", "))
    }
}
