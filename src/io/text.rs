//! # Text format
//!
//! A vertex count, the vertex keys, an edge count and one `src dst weight` triple per edge.
//! Vertices are added before edges, so an edge naming an unknown vertex fails with
//! [`GraphError::InvalidVertex`].

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::*;

/// A GraphReader for the text format
#[derive(Debug, Clone)]
pub struct TextGraphReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Reject repeated edges instead of ignoring them
    strict_edges: bool,
}

impl Default for TextGraphReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            strict_edges: false,
        }
    }
}

impl TextGraphReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn set_comment_identifier<S: Into<String>>(&mut self, c: S) {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.set_comment_identifier(c);
        self
    }

    /// Sets whether a repeated edge is an error (otherwise the first occurrence wins)
    pub fn set_strict_edges(&mut self, strict: bool) {
        self.strict_edges = strict;
    }

    /// Sets whether a repeated edge is an error (otherwise the first occurrence wins)
    pub fn strict_edges(mut self, strict: bool) -> Self {
        self.set_strict_edges(strict);
        self
    }

    /// Splits the non-comment lines of `reader` into whitespace separated tokens
    fn tokens<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !self.comment_identifier.is_empty()
                && line.trim_start().starts_with(&self.comment_identifier)
            {
                continue;
            }
            tokens.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(tokens)
    }
}

impl<G> GraphReader<G> for TextGraphReader
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let tokens = self.tokens(reader)?;
        let mut tokens = tokens.iter();

        let mut graph = G::new();

        let n: NumVertices = parse_next_value!(tokens, "vertex count");
        for _ in 0..n {
            let key: G::Key = parse_next_value!(tokens, "vertex");
            graph.add_vertex(key);
        }

        let m: NumEdges = parse_next_value!(tokens, "edge count");
        let mut ignored: NumEdges = 0;
        for i in 0..m {
            let u: G::Key = parse_next_value!(tokens, "edge source");
            let v: G::Key = parse_next_value!(tokens, "edge destination");
            let w: Weight = parse_next_value!(tokens, "edge weight");

            if !graph.add_edge(&u, &v, w)? {
                raise_error_unless!(
                    !self.strict_edges,
                    format!("edge #{} ({u:?}, {v:?}) appears twice", i + 1)
                );
                ignored += 1;
            }
        }

        raise_error_unless!(
            tokens.next().is_none(),
            format!("unexpected tokens after {m} edges")
        );

        debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            ignored,
            "read graph"
        );
        Ok(graph)
    }
}

/// A writer for the text format. Vertices are written in slot order and edges in
/// insertion order per source vertex.
#[derive(Debug, Clone, Default)]
pub struct TextGraphWriter;

impl TextGraphWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for TextGraphWriter
where
    G: WeightedAdjacencyList,
    G::Key: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_vertices())?;

        let mut first = true;
        for key in graph.vertices() {
            if !first {
                write!(writer, " ")?;
            }
            write!(writer, "{key}")?;
            first = false;
        }
        writeln!(writer)?;

        writeln!(writer, "{}", graph.number_of_edges())?;
        for (u, v, w) in graph.weighted_edges() {
            writeln!(writer, "{u} {v} {w}")?;
        }

        Ok(())
    }
}

/// Trait for creating graphs from the text format.
/// Used as shorthand for default TextGraphReader settings
pub trait GraphRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_text(BufReader::new(File::open(path)?))
    }
}

impl<G> GraphRead for G
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self> {
        TextGraphReader::default().try_read_graph(reader)
    }
}

/// Trait for writing graphs in the text format.
/// Used as shorthand for default TextGraphWriter settings
pub trait GraphWrite {
    /// Tries to write the graph to a given writer
    fn try_write_text<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a given file
    fn try_write_text_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G> GraphWrite for G
where
    G: WeightedAdjacencyList,
    G::Key: Display,
{
    fn try_write_text<W: Write>(&self, writer: W) -> Result<()> {
        TextGraphWriter::new().try_write_graph(self, writer)
    }

    fn try_write_text_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        TextGraphWriter::new().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{algo::*, gens::*};

    const SAMPLE: &str = "# four vertices\n4\nA B\n  C D\n4\nA B 1\nB C 2\nA C 5\n# last one\nC D 1\n";

    #[test]
    fn read_sample() {
        let g = SparseDiGraph::<String>::try_read_text(SAMPLE.as_bytes()).unwrap();

        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_edges(), 4);
        let (a, d) = ("A".to_string(), "D".to_string());
        assert_eq!(g.weight(&a, &"C".to_string()).unwrap(), 5);
        assert_eq!(
            g.min_distances(&a).unwrap().path_to(&d).unwrap(),
            ["A", "B", "C", "D"].map(String::from)
        );
    }

    #[test]
    fn unknown_vertex_in_edge() {
        let res = SparseDiGraph::<String>::try_read_text("2\nA B\n1\nA Z 3\n".as_bytes());
        assert!(matches!(res, Err(GraphError::InvalidVertex(_))));
    }

    #[test]
    fn malformed_inputs() {
        for input in [
            "",
            "x\n",
            "3\nA B\n",
            "2\nA B\n1\nA B\n",
            "2\nA B\n1\nA B one\n",
            "2\nA B\n1\nA B 1\nB A 1\n",
        ] {
            let res = SparseDiGraph::<String>::try_read_text(input.as_bytes());
            assert!(matches!(res, Err(GraphError::Malformed(_))), "{input:?}");
        }
    }

    #[test]
    fn duplicate_edges() {
        let input = "2\n1 2\n2\n1 2 4\n1 2 9\n";

        let g = ArrDiGraph::<u32>::try_read_text(input.as_bytes()).unwrap();
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.weight(&1, &2).unwrap(), 4);

        let res: Result<ArrDiGraph<u32>> = TextGraphReader::new()
            .strict_edges(true)
            .try_read_graph(input.as_bytes());
        assert!(matches!(res, Err(GraphError::Malformed(_))));
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "% header\n1\n#1\n0\n";
        let g: SparseDiGraph<String> = TextGraphReader::new()
            .comment_identifier("%")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert!(g.contains_vertex(&"#1".to_string()));
    }

    #[test]
    fn write_then_read() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let mut g: SparseDiGraph<u32> = WeightedGnp::new()
            .nodes(20)
            .prob(0.2)
            .weights(0, 100)
            .generate(rng)
            .unwrap();
        g.remove_vertex(&4);
        g.remove_vertex(&11);

        let mut buffer = Vec::new();
        g.try_write_text(&mut buffer).unwrap();
        let h = SparseDiGraph::<u32>::try_read_text(buffer.as_slice()).unwrap();

        assert_eq!(
            h.vertices().sorted().collect_vec(),
            g.vertices().sorted().collect_vec()
        );
        assert_eq!(
            h.weighted_edges().sorted().collect_vec(),
            g.weighted_edges().sorted().collect_vec()
        );
    }

    #[test]
    fn write_format() {
        let g = SparseDiGraph::from_weighted_edges(
            ["x", "y"].map(String::from),
            [("x".to_string(), "y".to_string(), 3)],
        )
        .unwrap();

        let mut buffer = Vec::new();
        g.try_write_text(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "2\nx y\n1\nx y 3\n");
    }
}
