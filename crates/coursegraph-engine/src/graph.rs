//! Prerequisite graph construction
//!
//! Nodes are the listed courses that resolved to a record. An edge runs from
//! a prerequisite to the course that requires it, and is only drawn when the
//! prerequisite is itself a node.

use coursegraph_core::{AnnotatedCourseInput, CourseIdentifier, CourseRecord, Diagnostic, DiagnosticCode};
use std::collections::{HashMap, HashSet, VecDeque};

/// A listed course together with its record
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCourse {
    pub input: AnnotatedCourseInput,
    pub record: CourseRecord,
}

impl ResolvedCourse {
    /// Pair an input with the record built for it
    pub fn new(input: AnnotatedCourseInput, record: CourseRecord) -> Self {
        Self { input, record }
    }
}

/// A node of the emitted graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub identifier: CourseIdentifier,

    /// `ID`, `ID (Name)`, then the annotation if any
    pub label: String,
}

impl GraphNode {
    /// Node id, e.g. `CS225`
    pub fn id(&self) -> String {
        self.identifier.to_string()
    }
}

/// Directed edge from prerequisite to dependent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub from: CourseIdentifier,
    pub to: CourseIdentifier,

    /// Satisfiable by concurrent enrollment
    pub corequisite: bool,
}

/// Prerequisite graph restricted to the listed courses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrerequisiteGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

/// Label shown for a course in the visualizer
pub fn node_label(input: &AnnotatedCourseInput, record: &CourseRecord) -> String {
    let mut label = input.identifier.to_string();

    if !record.display_name.is_empty() {
        label.push_str(&format!(" ({})", record.display_name));
    }
    if let Some(annotation) = &input.annotation {
        label.push(' ');
        label.push_str(annotation);
    }

    label
}

impl PrerequisiteGraph {
    /// Build the graph from resolved courses
    ///
    /// A listed alias ("See CS 374") stands in for its target, so edges that
    /// cite the target are drawn from the alias. A target that is listed in
    /// its own right keeps its own node.
    ///
    /// Returns one `EdgeOutOfScope` diagnostic per prerequisite that was not
    /// drawn because it is not listed.
    pub fn build(courses: &[ResolvedCourse]) -> (Self, Vec<Diagnostic>) {
        let listed: HashSet<&CourseIdentifier> =
            courses.iter().map(|c| &c.input.identifier).collect();

        let mut aliases: HashMap<&CourseIdentifier, &CourseIdentifier> = HashMap::new();
        for course in courses {
            if let Some(target) = &course.record.resolved_from {
                if !listed.contains(target) {
                    aliases.entry(target).or_insert(&course.input.identifier);
                }
            }
        }

        let mut nodes = Vec::with_capacity(courses.len());
        let mut edges = Vec::new();
        let mut diagnostics = Vec::new();

        for course in courses {
            nodes.push(GraphNode {
                identifier: course.input.identifier.clone(),
                label: node_label(&course.input, &course.record),
            });

            for (prerequisite, relation) in course.record.prerequisites() {
                let from = if listed.contains(prerequisite) {
                    prerequisite
                } else if let Some(alias) = aliases.get(prerequisite) {
                    *alias
                } else {
                    diagnostics.push(
                        Diagnostic::of(
                            DiagnosticCode::EdgeOutOfScope,
                            format!("{} is not listed; edge to {} not drawn", prerequisite, course.input.identifier),
                        )
                        .with_course(course.input.identifier.clone())
                        .with_dropped(prerequisite.to_string()),
                    );
                    continue;
                };

                edges.push(GraphEdge {
                    from: from.clone(),
                    to: course.input.identifier.clone(),
                    corequisite: relation.kind.is_corequisite(),
                });
            }
        }

        (Self { nodes, edges }, diagnostics)
    }

    /// Nodes in input order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in input order, then catalog order
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Immediate prerequisites of a course
    pub fn prerequisites_of(&self, course: &CourseIdentifier) -> Vec<&CourseIdentifier> {
        self.edges
            .iter()
            .filter(|edge| &edge.to == course)
            .map(|edge| &edge.from)
            .collect()
    }

    /// Courses ordered so that every prerequisite precedes its dependents
    ///
    /// Returns `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<&CourseIdentifier>> {
        let mut in_degree: HashMap<&CourseIdentifier, usize> =
            self.nodes.iter().map(|n| (&n.identifier, 0)).collect();
        let mut children: HashMap<&CourseIdentifier, Vec<&CourseIdentifier>> = HashMap::new();

        for edge in &self.edges {
            *in_degree.entry(&edge.to).or_insert(0) += 1;
            children.entry(&edge.from).or_default().push(&edge.to);
        }

        // Seed in node order so the result is deterministic
        let mut queue: VecDeque<&CourseIdentifier> = self
            .nodes
            .iter()
            .map(|n| &n.identifier)
            .filter(|id| in_degree.get(id) == Some(&0))
            .collect();
        let mut result = Vec::with_capacity(self.nodes.len());

        // Kahn's algorithm
        while let Some(node) = queue.pop_front() {
            result.push(node);

            for child in children.get(node).map(Vec::as_slice).unwrap_or_default() {
                if let Some(degree) = in_degree.get_mut(child) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(*child);
                    }
                }
            }
        }

        if result.len() == self.nodes.len() {
            Some(result)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegraph_core::{PrerequisiteRelation, RelationKind};
    use pretty_assertions::assert_eq;

    fn id(department: &str, number: u32) -> CourseIdentifier {
        CourseIdentifier::new(department, number)
    }

    fn course(department: &str, number: u32, relations: Vec<PrerequisiteRelation>) -> ResolvedCourse {
        ResolvedCourse::new(
            AnnotatedCourseInput::new(id(department, number)),
            CourseRecord::new(id(department, number), "").with_relations(relations),
        )
    }

    #[test]
    fn edges_only_to_listed_prerequisites() {
        let courses = vec![
            course(
                "CS",
                225,
                vec![PrerequisiteRelation::new(
                    RelationKind::OneOf,
                    vec![id("CS", 173), id("MATH", 213)],
                )],
            ),
            course("CS", 173, vec![]),
        ];

        let (graph, diagnostics) = PrerequisiteGraph::build(&courses);

        assert_eq!(
            graph.edges(),
            &[GraphEdge { from: id("CS", 173), to: id("CS", 225), corequisite: false }]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, DiagnosticCode::EdgeOutOfScope);
        assert_eq!(diagnostics[0].dropped.as_deref(), Some("MATH213"));

        let available: HashSet<_> = graph.nodes().iter().map(|n| &n.identifier).collect();
        assert!(graph.edges().iter().all(|e| available.contains(&e.from)));
    }

    #[test]
    fn edges_citing_a_cross_listed_target_start_at_the_alias() {
        let courses = vec![
            ResolvedCourse::new(
                AnnotatedCourseInput::new(id("ECE", 374)),
                CourseRecord::new(id("ECE", 374), "Algorithms")
                    .with_relations(vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("CS", 225)])])
                    .with_resolved_from(id("CS", 374)),
            ),
            course("CS", 473, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("CS", 374)])]),
            course("CS", 225, vec![]),
        ];

        let (graph, diagnostics) = PrerequisiteGraph::build(&courses);

        assert_eq!(
            graph.edges(),
            &[
                GraphEdge { from: id("CS", 225), to: id("ECE", 374), corequisite: false },
                GraphEdge { from: id("ECE", 374), to: id("CS", 473), corequisite: false },
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn listed_target_keeps_its_own_edges() {
        let courses = vec![
            ResolvedCourse::new(
                AnnotatedCourseInput::new(id("ECE", 374)),
                CourseRecord::new(id("ECE", 374), "").with_resolved_from(id("CS", 374)),
            ),
            course("CS", 374, vec![]),
            course("CS", 473, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("CS", 374)])]),
        ];

        let (graph, _) = PrerequisiteGraph::build(&courses);

        assert_eq!(
            graph.edges(),
            &[GraphEdge { from: id("CS", 374), to: id("CS", 473), corequisite: false }]
        );
    }

    #[test]
    fn corequisite_flag_follows_relation_kind() {
        let courses = vec![
            course(
                "PHYS",
                211,
                vec![
                    PrerequisiteRelation::new(RelationKind::CreditOrConcurrentEnrollment, vec![id("MATH", 231)]),
                    PrerequisiteRelation::new(RelationKind::AllOf, vec![id("MATH", 221)]),
                ],
            ),
            course("MATH", 231, vec![]),
            course("MATH", 221, vec![]),
        ];

        let (graph, _) = PrerequisiteGraph::build(&courses);
        let flags: Vec<bool> = graph.edges().iter().map(|e| e.corequisite).collect();

        assert_eq!(flags, vec![true, false]);
        assert_eq!(graph.prerequisites_of(&id("PHYS", 211)), vec![&id("MATH", 231), &id("MATH", 221)]);
    }

    #[test]
    fn labels_include_name_and_annotation() {
        let input = AnnotatedCourseInput::new(id("CS", 225)).with_annotation("(honors)");

        assert_eq!(
            node_label(&input, &CourseRecord::new(id("CS", 225), "Data Structures")),
            "CS225 (Data Structures) (honors)"
        );
        assert_eq!(node_label(&input, &CourseRecord::new(id("CS", 225), "")), "CS225 (honors)");
        assert_eq!(
            node_label(&AnnotatedCourseInput::new(id("CS", 225)), &CourseRecord::new(id("CS", 225), "")),
            "CS225"
        );
    }

    #[test]
    fn topological_order_puts_prerequisites_first() {
        let courses = vec![
            course("CS", 374, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("CS", 225)])]),
            course("CS", 225, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("CS", 173)])]),
            course("CS", 173, vec![]),
        ];

        let (graph, _) = PrerequisiteGraph::build(&courses);

        assert_eq!(
            graph.topological_order(),
            Some(vec![&id("CS", 173), &id("CS", 225), &id("CS", 374)])
        );
    }

    #[test]
    fn cycle_has_no_topological_order() {
        let courses = vec![
            course("A", 1, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("B", 2)])]),
            course("B", 2, vec![PrerequisiteRelation::new(RelationKind::Unclassified, vec![id("A", 1)])]),
        ];

        let (graph, _) = PrerequisiteGraph::build(&courses);
        assert_eq!(graph.topological_order(), None);
    }
}
