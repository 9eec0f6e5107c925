//! CourseGraph engine - builds the prerequisite graph
//!
//! This crate implements the run itself:
//! - Reading the operator's course list
//! - Building course records from catalog entries ("see X" included)
//! - Restricting prerequisites to the listed courses
//! - Writing the edge and node artifacts for the visualizer

pub mod input;
pub mod record_builder;
pub mod graph;
pub mod emit;
pub mod pipeline;

pub use input::{parse_course_list, parse_line, read_course_list, CourseList};
pub use record_builder::{BuiltRecord, RecordBuilder, RecordError};
pub use graph::{GraphEdge, GraphNode, PrerequisiteGraph, ResolvedCourse};
pub use emit::{render_edges, render_nodes, write_artifacts, EmitError};
pub use pipeline::{GraphPipeline, PipelineOutcome};
