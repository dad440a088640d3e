use std::fmt::Display;

use crate::core::{NodeKey, Weight};
use crate::graph::Graph;
use crate::metrics::Comparison;
use crate::result::MstResult;
use crate::trace::{Decision, Trace};

pub trait LatexDisplay {
    fn to_latex(&self) -> String;
}

/// Escapes the characters LaTeX treats specially in text mode.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}

fn label(value: &impl Display) -> String {
    escape(&value.to_string())
}

impl<K, W> LatexDisplay for MstResult<K, W>
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    fn to_latex(&self) -> String {
        let mut s = String::new();
        s.push_str("\\begin{itemize}\n");
        for (u, v, w) in &self.edges {
            s.push_str(&format!("  \\item ({}, {}) : {}\n", label(u), label(v), w));
        }
        s.push_str(&format!(
            "  \\item \\textbf{{Total Weight:}} {}\n",
            self.total_weight
        ));
        if let Some(warning) = self.warning() {
            s.push_str(&format!("  \\item \\textit{{{}}}\n", label(&warning)));
        }
        s.push_str("\\end{itemize}");
        s
    }
}

impl<K, W> LatexDisplay for Trace<K, W>
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    fn to_latex(&self) -> String {
        let mut s = String::new();
        s.push_str("\\begin{tabular}{r|c|r|c|r}\n");
        s.push_str("Step & Edge & Weight & Decision & Total \\\\\n\\hline\n");
        for step in self {
            let decision = match step.decision {
                Decision::Accepted => "\\checkmark",
                Decision::Rejected => "$\\times$",
            };
            s.push_str(&format!(
                "{} & ({}, {}) & {} & {} & {} \\\\\n",
                step.index + 1,
                label(&step.from),
                label(&step.to),
                step.weight,
                decision,
                step.total
            ));
        }
        s.push_str("\\end{tabular}");
        s
    }
}

impl<W> LatexDisplay for Comparison<W>
where
    W: Weight + Display,
{
    fn to_latex(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("\\begin{{tabular}}{{l|{}}}\n", "r".repeat(self.entries.len())));

        let mut header = vec!["Metric".to_string()];
        header.extend(self.entries.iter().map(|m| label(&m.algorithm)));
        s.push_str(&header.join(" & "));
        s.push_str(" \\\\\n\\hline\n");

        let mut row = |name: &str, cell: &dyn Fn(usize) -> String| {
            let mut cells = vec![name.to_string()];
            cells.extend((0..self.entries.len()).map(cell));
            s.push_str(&cells.join(" & "));
            s.push_str(" \\\\\n");
        };

        if let Some(graph) = &self.graph {
            row("Nodes", &|_| graph.nodes.to_string());
            row("Edges", &|_| graph.edges.to_string());
        }
        row("MST edges", &|i| self.entries[i].accepted_edges.to_string());
        row("Iterations", &|i| self.entries[i].iterations.to_string());
        row("Comparisons", &|i| self.entries[i].edge_comparisons.to_string());
        row("MST weight", &|i| self.entries[i].total_weight.to_string());
        row("Runtime (ms)", &|i| format!("{:.3}", self.entries[i].elapsed_ms));

        s.push_str("\\end{tabular}");
        s
    }
}

impl<K, W> LatexDisplay for Graph<K, W>
where
    K: NodeKey + Display,
    W: Weight + Display,
{
    fn to_latex(&self) -> String {
        let mut s = format!(
            "G = (V, E) with |V| = {} and |E| = {}\n",
            self.order(),
            self.size()
        );
        s.push_str("\\begin{tabular}{c|r}\n");
        s.push_str("Edge & Weight \\\\\n\\hline\n");
        for (_, edge) in self.edges() {
            s.push_str(&format!(
                "({}, {}) & {} \\\\\n",
                label(self.node_key(edge.u)),
                label(self.node_key(edge.v)),
                edge.weight
            ));
        }
        s.push_str(&format!(
            "\\hline\n\\textbf{{Total}} & {} \\\\\n",
            self.total_weight()
        ));
        s.push_str("\\end{tabular}");
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare, kruskal_mst, prim_mst};

    fn triangle() -> Graph<&'static str, i32> {
        Graph::from_edges([("a", "b", 1), ("b", "c", 2), ("a", "c", 3)]).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a_b & 50%"), "a\\_b \\& 50\\%");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_result_itemize() {
        let run = kruskal_mst(&triangle()).unwrap();
        assert_eq!(
            run.result.to_latex(),
            "\\begin{itemize}\n  \\item (a, b) : 1\n  \\item (b, c) : 2\n  \\item \\textbf{Total Weight:} 3\n\\end{itemize}"
        );
    }

    #[test]
    fn test_disconnected_result_mentions_warning() {
        let graph = Graph::<&str, i32>::from_edges([("a", "b", 1), ("c", "d", 2)]).unwrap();
        let run = prim_mst(&graph, None).unwrap();
        assert!(run.result.to_latex().contains("\\textit{graph is disconnected"));
    }

    #[test]
    fn test_trace_rows() {
        let run = kruskal_mst(&triangle()).unwrap();
        let latex = run.trace.to_latex();
        assert!(latex.contains("1 & (a, b) & 1 & \\checkmark & 1 \\\\"));
        assert!(latex.contains("3 & (a, c) & 3 & $\\times$ & 3 \\\\"));
        assert!(latex.ends_with("\\end{tabular}"));
    }

    #[test]
    fn test_comparison_table() {
        let graph = triangle();
        let kruskal = kruskal_mst(&graph).unwrap();
        let prim = prim_mst(&graph, None).unwrap();
        let latex = compare(&[&kruskal, &prim]).with_graph(&graph).to_latex();
        assert!(latex.starts_with("\\begin{tabular}{l|rr}\n"));
        assert!(latex.contains("Metric & Kruskal's & Prim's \\\\"));
        assert!(latex.contains("MST edges & 2 & 2 \\\\"));
        assert!(latex.contains("MST weight & 3 & 3 \\\\"));
        assert!(latex.contains("Nodes & 3 & 3 \\\\"));
    }

    #[test]
    fn test_graph_table() {
        let latex = triangle().to_latex();
        assert!(latex.starts_with("G = (V, E) with |V| = 3 and |E| = 3\n"));
        assert!(latex.contains("(b, c) & 2 \\\\"));
        assert!(latex.contains("\\textbf{Total} & 6 \\\\"));
    }
}
