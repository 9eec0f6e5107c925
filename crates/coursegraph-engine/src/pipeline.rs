//! End-to-end run: course list in, graph and report out

use crate::graph::{PrerequisiteGraph, ResolvedCourse};
use crate::input::CourseList;
use crate::record_builder::RecordBuilder;
use coursegraph_catalog::CatalogSource;
use coursegraph_core::{Config, Diagnostic, DiagnosticCode, Report};
use futures::stream::{self, StreamExt};

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub graph: PrerequisiteGraph,
    pub report: Report,
}

/// Fetches, parses and links the listed courses
pub struct GraphPipeline<'a, S: CatalogSource + ?Sized> {
    builder: RecordBuilder<'a, S>,
    concurrency: usize,
}

impl<'a, S: CatalogSource + ?Sized> GraphPipeline<'a, S> {
    /// Create a pipeline over a catalog source
    pub fn new(source: &'a S, config: &Config) -> Self {
        Self {
            builder: RecordBuilder::from_config(source, config),
            concurrency: config.catalog.concurrency.max(1),
        }
    }

    /// Run the pipeline
    ///
    /// Courses whose record cannot be built are left out of the graph and
    /// reported; the run itself never fails.
    pub async fn run(&self, list: &CourseList) -> PipelineOutcome {
        tracing::info!(
            courses = list.len(),
            source = self.builder.source_name(),
            concurrency = self.concurrency,
            "building prerequisite graph"
        );

        let mut report = Report::new();
        report.extend(list.diagnostics.iter().cloned());

        // Buffered (not unordered) so nodes keep the input order
        let results: Vec<_> = stream::iter(list.courses.iter())
            .map(|input| async move { (input, self.builder.build(&input.identifier).await) })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut resolved = Vec::with_capacity(results.len());
        for (input, result) in results {
            match result {
                Ok(built) => {
                    report.extend(built.diagnostics);
                    resolved.push(ResolvedCourse::new(input.clone(), built.record));
                }
                Err(err) => {
                    tracing::warn!(course = %input.identifier, error = %err, "skipping course");
                    report.add_diagnostic(err.to_diagnostic(&input.identifier));
                }
            }
        }

        let (graph, dropped_edges) = PrerequisiteGraph::build(&resolved);
        report.extend(dropped_edges);

        if graph.topological_order().is_none() {
            tracing::warn!("prerequisite graph contains a cycle");
            report.add_diagnostic(Diagnostic::of(
                DiagnosticCode::PrerequisiteCycle,
                "Listed courses form a prerequisite cycle",
            ));
        }

        report.summary.courses_requested = list.len();
        report.summary.courses_resolved = resolved.len();
        report.summary.nodes_emitted = graph.nodes().len();
        report.summary.edges_emitted = graph.edges().len();

        tracing::info!(
            nodes = report.summary.nodes_emitted,
            edges = report.summary.edges_emitted,
            warnings = report.summary.warnings,
            "graph built"
        );

        PipelineOutcome { graph, report }
    }
}
