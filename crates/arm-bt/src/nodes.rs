use arm_core::{Blackboard, BlackboardError, TickContext};

use crate::bt::{BtNode, NodeResult, NodeStatus};

pub struct ReactiveSelector {
    children: Vec<Box<dyn BtNode>>,
    running: Option<usize>,
}

impl ReactiveSelector {
    pub fn new(children: Vec<Box<dyn BtNode>>) -> Self {
        Self {
            children,
            running: None,
        }
    }
}

impl BtNode for ReactiveSelector {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = match child.tick(ctx, blackboard) {
                Ok(status) => status,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            match status {
                NodeStatus::Failure => continue,
                NodeStatus::Success => {
                    self.reset();
                    return Ok(NodeStatus::Success);
                }
                NodeStatus::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    return Ok(NodeStatus::Running);
                }
            }
        }

        self.reset();
        Ok(NodeStatus::Failure)
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

pub struct ReactiveSequence {
    children: Vec<Box<dyn BtNode>>,
    running: Option<usize>,
}

impl ReactiveSequence {
    pub fn new(children: Vec<Box<dyn BtNode>>) -> Self {
        Self {
            children,
            running: None,
        }
    }
}

impl BtNode for ReactiveSequence {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = match child.tick(ctx, blackboard) {
                Ok(status) => status,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            match status {
                NodeStatus::Failure => {
                    self.reset();
                    return Ok(NodeStatus::Failure);
                }
                NodeStatus::Running => {
                    if self.running != Some(i) {
                        if let Some(prev) = self.running {
                            self.children[prev].reset();
                        }
                        self.running = Some(i);
                    }
                    return Ok(NodeStatus::Running);
                }
                NodeStatus::Success => continue,
            }
        }

        self.reset();
        Ok(NodeStatus::Success)
    }

    fn reset(&mut self) {
        self.running = None;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

pub struct Sequence {
    children: Vec<Box<dyn BtNode>>,
    index: usize,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn BtNode>>) -> Self {
        Self { children, index: 0 }
    }
}

impl BtNode for Sequence {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        while self.index < self.children.len() {
            let status = match self.children[self.index].tick(ctx, blackboard) {
                Ok(status) => status,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            match status {
                NodeStatus::Running => return Ok(NodeStatus::Running),
                NodeStatus::Failure => {
                    self.reset();
                    return Ok(NodeStatus::Failure);
                }
                NodeStatus::Success => self.index += 1,
            }
        }

        self.reset();
        Ok(NodeStatus::Success)
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

pub struct Selector {
    children: Vec<Box<dyn BtNode>>,
    index: usize,
}

impl Selector {
    pub fn new(children: Vec<Box<dyn BtNode>>) -> Self {
        Self { children, index: 0 }
    }
}

impl BtNode for Selector {
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        while self.index < self.children.len() {
            let status = match self.children[self.index].tick(ctx, blackboard) {
                Ok(status) => status,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            match status {
                NodeStatus::Running => return Ok(NodeStatus::Running),
                NodeStatus::Success => {
                    self.reset();
                    return Ok(NodeStatus::Success);
                }
                NodeStatus::Failure => self.index += 1,
            }
        }

        self.reset();
        Ok(NodeStatus::Failure)
    }

    fn reset(&mut self) {
        self.index = 0;
        for c in self.children.iter_mut() {
            c.reset();
        }
    }
}

/// Leaf wrapping a fallible predicate over the blackboard.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F> BtNode for Condition<F>
where
    F: FnMut(&TickContext, &Blackboard) -> Result<bool, BlackboardError> + 'static,
{
    fn tick(&mut self, ctx: &TickContext, blackboard: &mut Blackboard) -> NodeResult {
        if (self.cond)(ctx, &*blackboard)? {
            Ok(NodeStatus::Success)
        } else {
            Ok(NodeStatus::Failure)
        }
    }
}
