//! Target graph - every target reachable from a package, in link order.

use std::collections::HashMap;
use std::sync::Arc;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Topo;

use crate::core::{BuildTarget, Package};

/// Graph of build targets keyed by name. An edge `a -> b` means `a` links
/// against `b`.
#[derive(Debug, Clone)]
pub struct TargetGraph {
    graph: DiGraph<Arc<BuildTarget>, ()>,
    by_name: HashMap<String, NodeIndex>,
}

impl TargetGraph {
    /// Collect the package's own targets and everything they link against.
    pub fn from_package(package: &Package) -> Self {
        let mut plan = TargetGraph {
            graph: DiGraph::new(),
            by_name: HashMap::new(),
        };
        for target in package.targets() {
            plan.add_target(target);
        }
        plan
    }

    fn add_target(&mut self, target: &Arc<BuildTarget>) -> NodeIndex {
        if let Some(&node) = self.by_name.get(target.name()) {
            return node;
        }

        let node = self.graph.add_node(target.clone());
        self.by_name.insert(target.name().to_string(), node);

        for dep in target.dependencies() {
            let dep_node = self.add_target(dep);
            if !self.graph.contains_edge(node, dep_node) {
                self.graph.add_edge(node, dep_node, ());
            }
        }
        node
    }

    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up a target by name.
    pub fn get(&self, name: &str) -> Option<&Arc<BuildTarget>> {
        self.by_name.get(name).map(|&n| &self.graph[n])
    }

    /// Targets with dependencies before dependents.
    pub fn link_order(&self) -> Vec<Arc<BuildTarget>> {
        let mut topo = Topo::new(&self.graph);
        let mut order = Vec::new();

        while let Some(node) = topo.next(&self.graph) {
            order.push(self.graph[node].clone());
        }

        // Topo yields dependents first since edges point at dependencies.
        order.reverse();
        order
    }

    /// Names of the targets depending directly on `name`.
    pub fn dependents(&self, name: &str) -> Vec<&str> {
        match self.by_name.get(name) {
            Some(&node) => self
                .graph
                .neighbors_directed(node, petgraph::Direction::Incoming)
                .map(|n| self.graph[n].name())
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RepoPath;
    use crate::ops::describe::{get_package, PackageConfig};
    use crate::resolver::{ExternalPackage, Registry};
    use crate::test_support::default_registry;

    fn position(order: &[Arc<BuildTarget>], name: &str) -> usize {
        order.iter().position(|t| t.name() == name).unwrap()
    }

    #[test]
    fn test_link_order() {
        let pkg = get_package(&PackageConfig::default(), &default_registry()).unwrap();
        let plan = TargetGraph::from_package(&pkg);

        assert_eq!(plan.len(), 5);
        let order = plan.link_order();
        assert!(position(&order, "cbase") < position(&order, "ctext"));
        assert!(position(&order, "ccore") < position(&order, "ctext"));
        assert!(position(&order, "ctext") < position(&order, "ctext_test"));
        assert!(position(&order, "cunittest") < position(&order, "ctext_test"));
    }

    #[test]
    fn test_transitive_upstreams_included() {
        let root = RepoPath::parse("r");
        let mut registry = Registry::with_defaults(&root);
        registry.register_external(ExternalPackage::under(&root, "cbase").with_deps(["ccore"]));

        let config = PackageConfig {
            include_core: false,
            ..PackageConfig::default()
        };
        let pkg = get_package(&config, &registry).unwrap();
        let plan = TargetGraph::from_package(&pkg);

        assert!(plan.get("ccore").is_some());
        let order = plan.link_order();
        assert!(position(&order, "ccore") < position(&order, "cbase"));
        assert_eq!(plan.dependents("ccore"), vec!["cbase"]);
    }

    #[test]
    fn test_shared_upstream_counted_once() {
        let root = RepoPath::parse("r");
        let mut registry = Registry::with_defaults(&root);
        registry.register_external(ExternalPackage::under(&root, "cbase").with_deps(["ccore"]));

        // ccore reached both directly and through cbase
        let pkg = get_package(&PackageConfig::default(), &registry).unwrap();
        let plan = TargetGraph::from_package(&pkg);

        assert_eq!(plan.len(), 5);
        let mut dependents = plan.dependents("ccore");
        dependents.sort();
        assert_eq!(dependents, vec!["cbase", "ctext", "ctext_test"]);
    }
}
