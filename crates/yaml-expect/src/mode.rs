//! Per-chain assertion-mode state.

use yaml_tree::NodeKind;

use crate::subject::Subject;

/// The semantic mode a chain can enter. `Value` means later checks compare
/// the node's logical value rather than the node object itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Value,
}

/// Mode state owned by one assertion chain.
///
/// Starts unset; [`enter_value`](NodeMode::enter_value) records the
/// subject's kind tag together with the value mode, and no transition leads
/// back — a chain is single-use. The kind is copied by value, so the state
/// never borrows the node it was derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeMode {
    kind: Option<NodeKind>,
    property: Option<Property>,
}

impl NodeMode {
    /// Enter value mode if the subject is a node. For plain subjects
    /// nothing is recorded and later checks stay on the host default path.
    pub fn enter_value(&mut self, subject: &Subject<'_>) {
        if let Some(kind) = subject.classify() {
            self.kind = Some(kind);
            self.property = Some(Property::Value);
        }
    }

    /// The recorded kind, if value mode was ever entered.
    pub fn kind(&self) -> Option<NodeKind> {
        self.kind
    }

    /// Whether the chain has entered value mode.
    pub fn is_value(&self) -> bool {
        self.property == Some(Property::Value)
    }
}
