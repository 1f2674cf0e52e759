pub mod engine;
pub mod errors;
pub mod extractor;
pub mod morphology;
pub mod tree;
pub mod types;

pub use engine::{Pipeline, PipelineConfig, RelationExtractor, TripleExtractor};
pub use errors::ExtractionError;
pub use extractor::{Extractor, Mapper, ObjectExtractor, SubjectExtractor};
pub use morphology::{CaseOracle, CaseResolver};
pub use tree::{DependencyParseTree, Node, NodeData, NodeId, TreeParser};
pub use types::{TreeSpan, TreeTriple};
