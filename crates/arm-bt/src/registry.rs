use std::any::{type_name, TypeId};
use std::collections::BTreeMap;

use arm_core::{Blackboard, BlackboardError};
use thiserror::Error;
use tracing::debug;

use crate::bt::BtNode;
use crate::frame_empty::{FrameEmptyCondition, FRAME_EMPTY_NODE_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Declared port of a registered node: name, direction, and element type.
///
/// The carried `declare` hook registers the (name, type) pair on a
/// blackboard, so a port whose name is already bound to another type is
/// caught when the node is built, not when it first ticks.
#[derive(Clone)]
pub struct PortSpec {
    pub name: &'static str,
    pub direction: PortDirection,
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub description: &'static str,
    declare: fn(&mut Blackboard, &'static str) -> Result<(), BlackboardError>,
}

impl PortSpec {
    pub fn input<T: 'static>(name: &'static str, description: &'static str) -> Self {
        Self::new::<T>(name, PortDirection::Input, description)
    }

    pub fn output<T: 'static>(name: &'static str, description: &'static str) -> Self {
        Self::new::<T>(name, PortDirection::Output, description)
    }

    fn new<T: 'static>(
        name: &'static str,
        direction: PortDirection,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            direction,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            description,
            declare: |bb, name| bb.declare::<T>(name).map(|_| ()),
        }
    }

    pub fn declare_on(&self, blackboard: &mut Blackboard) -> Result<(), BlackboardError> {
        (self.declare)(blackboard, self.name)
    }
}

impl std::fmt::Debug for PortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortSpec")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("node name must not be empty")]
    EmptyNodeName,

    #[error("node `{0}` is already registered")]
    DuplicateNode(String),

    #[error("node `{node}` declares a port with an empty name")]
    EmptyPortName { node: String },

    #[error("node `{node}` declares duplicate port `{port}`")]
    DuplicatePort { node: String, port: &'static str },

    #[error("no node registered under `{0}`")]
    UnknownNode(String),

    #[error("port declaration failed: {0}")]
    Port(#[from] BlackboardError),
}

struct RegisteredNode {
    ports: Vec<PortSpec>,
    factory: Box<dyn Fn() -> Box<dyn BtNode>>,
}

/// Factory table mapping node names to declared ports and constructors.
#[derive(Default)]
pub struct NodeRegistry {
    entries: BTreeMap<String, RegisteredNode>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &str,
        ports: Vec<PortSpec>,
        factory: impl Fn() -> Box<dyn BtNode> + 'static,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyNodeName);
        }
        if self.entries.contains_key(name) {
            return Err(RegistryError::DuplicateNode(name.to_string()));
        }
        for (i, port) in ports.iter().enumerate() {
            if port.name.is_empty() {
                return Err(RegistryError::EmptyPortName {
                    node: name.to_string(),
                });
            }
            if ports[..i].iter().any(|p| p.name == port.name) {
                return Err(RegistryError::DuplicatePort {
                    node: name.to_string(),
                    port: port.name,
                });
            }
        }

        debug!(node = name, ports = ports.len(), "registered node type");
        self.entries.insert(
            name.to_string(),
            RegisteredNode {
                ports,
                factory: Box::new(factory),
            },
        );
        Ok(())
    }

    pub fn ports(&self, name: &str) -> Result<&[PortSpec], RegistryError> {
        self.entries
            .get(name)
            .map(|e| e.ports.as_slice())
            .ok_or_else(|| RegistryError::UnknownNode(name.to_string()))
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Construct a node, declaring its ports on `blackboard` first. A port
    /// name already bound to another type surfaces here as a typed error.
    pub fn build(
        &self,
        name: &str,
        blackboard: &mut Blackboard,
    ) -> Result<Box<dyn BtNode>, RegistryError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownNode(name.to_string()))?;
        for port in &entry.ports {
            port.declare_on(blackboard)?;
        }
        Ok((entry.factory)())
    }
}

/// Register the condition nodes this crate ships with.
pub fn register_builtin_nodes(registry: &mut NodeRegistry) -> Result<(), RegistryError> {
    registry.register(
        FRAME_EMPTY_NODE_NAME,
        FrameEmptyCondition::provided_ports(),
        || Box::new(FrameEmptyCondition::new()),
    )
}
