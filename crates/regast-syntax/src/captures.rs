//! Capture list extraction.
//!
//! Walks the tree in textual order and records every capturing group along
//! with how many enclosing constructs make its participation conditional.

use regast_capture::{Capture, CaptureList};

use crate::ast::visitor::{Visitor, walk_group};
use crate::ast::{
    AbsentFunction, AbsentFunctionKind, Alternation, ConditionKind, Conditional, Group, Node,
    Quantification,
};

pub fn capture_list(root: &Node) -> CaptureList {
    let mut collector = CaptureCollector::default();
    collector.visit_node(root);
    collector.captures
}

#[derive(Default)]
struct CaptureCollector {
    captures: CaptureList,
    depth: u32,
}

impl CaptureCollector {
    fn optionally(&mut self, node: &Node) {
        self.depth += 1;
        self.visit_node(node);
        self.depth -= 1;
    }
}

impl Visitor for CaptureCollector {
    fn visit_alternation(&mut self, alt: &Alternation) {
        for child in &alt.children {
            self.optionally(child);
        }
    }

    fn visit_quantification(&mut self, quant: &Quantification) {
        if quant.amount.value.is_optional() {
            self.optionally(&quant.child);
        } else {
            self.visit_node(&quant.child);
        }
    }

    fn visit_conditional(&mut self, cond: &Conditional) {
        if let ConditionKind::Group(group) = &cond.condition.kind {
            self.visit_group(group);
        }
        self.optionally(&cond.true_branch);
        self.optionally(&cond.false_branch);
    }

    fn visit_group(&mut self, group: &Group) {
        if group.kind.value.is_capturing() {
            let name = group.kind.value.name().map(|n| n.value.clone());
            self.captures.push(Capture::new(name, self.depth, group.range));
        }
        walk_group(self, group);
    }

    fn visit_absent_function(&mut self, absent: &AbsentFunction) {
        if let AbsentFunctionKind::Expression { expr, .. } = &absent.kind {
            self.visit_node(expr);
        }
    }
}
