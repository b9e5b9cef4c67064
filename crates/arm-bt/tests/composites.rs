use std::cell::RefCell;
use std::rc::Rc;

use arm_bt::{BehaviorTree, BtNode, Condition, NodeResult, NodeStatus, Sequence};
use arm_core::{Blackboard, BlackboardError, TickContext};

fn ctx(tick: u64) -> TickContext {
    TickContext {
        tick,
        dt_seconds: 0.1,
        seed: 0,
    }
}

/// Leaf that replays a scripted list of results and records lifecycle calls.
struct Scripted {
    name: &'static str,
    results: Vec<NodeResult>,
    cursor: usize,
    log: Rc<RefCell<Vec<String>>>,
}

impl Scripted {
    fn new(name: &'static str, results: Vec<NodeResult>, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name,
            results,
            cursor: 0,
            log,
        }
    }
}

impl BtNode for Scripted {
    fn tick(&mut self, _ctx: &TickContext, _blackboard: &mut Blackboard) -> NodeResult {
        self.log.borrow_mut().push(format!("tick:{}", self.name));
        let result = self.results[self.cursor.min(self.results.len() - 1)].clone();
        self.cursor += 1;
        result
    }

    fn reset(&mut self) {
        self.log.borrow_mut().push(format!("reset:{}", self.name));
        self.cursor = 0;
    }
}

#[test]
fn sequence_fails_fast_and_resets() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = Scripted::new("a", vec![Ok(NodeStatus::Success)], log.clone());
    let b = Scripted::new("b", vec![Ok(NodeStatus::Failure)], log.clone());
    let c = Scripted::new("c", vec![Ok(NodeStatus::Success)], log.clone());

    let mut seq = Sequence::new(vec![Box::new(a), Box::new(b), Box::new(c)]);
    let mut bb = Blackboard::new();
    assert_eq!(seq.tick(&ctx(0), &mut bb), Ok(NodeStatus::Failure));
    // c never ticked; the whole subtree is reset after completion.
    let log = log.borrow();
    assert!(log.contains(&"tick:a".to_string()));
    assert!(log.contains(&"tick:b".to_string()));
    assert!(!log.contains(&"tick:c".to_string()));
    assert!(log.contains(&"reset:c".to_string()));
}

#[test]
fn blackboard_error_aborts_the_tick_and_resets() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = Scripted::new("a", vec![Ok(NodeStatus::Success)], log.clone());
    let broken = Scripted::new(
        "broken",
        vec![Err(BlackboardError::Missing {
            key: "frameA".to_string(),
        })],
        log.clone(),
    );
    let c = Scripted::new("c", vec![Ok(NodeStatus::Success)], log.clone());

    let mut seq = Sequence::new(vec![Box::new(a), Box::new(broken), Box::new(c)]);
    let mut bb = Blackboard::new();
    assert_eq!(
        seq.tick(&ctx(0), &mut bb),
        Err(BlackboardError::Missing {
            key: "frameA".to_string()
        })
    );
    assert!(!log.borrow().contains(&"tick:c".to_string()));
    assert!(log.borrow().contains(&"reset:a".to_string()));
}

#[test]
fn reactive_sequence_resets_displaced_running_child() {
    let log = Rc::new(RefCell::new(Vec::new()));
    // First child fails on tick 2, so the running second child must be reset.
    let gate = Scripted::new(
        "gate",
        vec![Ok(NodeStatus::Success), Ok(NodeStatus::Failure)],
        log.clone(),
    );
    let work = Scripted::new("work", vec![Ok(NodeStatus::Running)], log.clone());

    let mut seq = Sequence::new(vec![Box::new(gate), Box::new(work)]);
    let mut bb = Blackboard::new();
    assert_eq!(seq.tick(&ctx(0), &mut bb), Ok(NodeStatus::Running));
    assert_eq!(seq.tick(&ctx(1), &mut bb), Ok(NodeStatus::Failure));
    assert!(log.borrow().contains(&"reset:work".to_string()));
}

#[test]
fn memory_sequence_resumes_without_rechecking_earlier_children() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let gate = Scripted::new(
        "gate",
        vec![Ok(NodeStatus::Success), Ok(NodeStatus::Failure)],
        log.clone(),
    );
    let work = Scripted::new(
        "work",
        vec![Ok(NodeStatus::Running), Ok(NodeStatus::Success)],
        log.clone(),
    );

    let mut seq = arm_bt::MemSequence::new(vec![Box::new(gate), Box::new(work)]);
    let mut bb = Blackboard::new();
    assert_eq!(seq.tick(&ctx(0), &mut bb), Ok(NodeStatus::Running));
    assert_eq!(seq.tick(&ctx(1), &mut bb), Ok(NodeStatus::Success));
    // The gate was only evaluated once even though its second scripted
    // result would have failed.
    let ticks = log
        .borrow()
        .iter()
        .filter(|e| e.as_str() == "tick:gate")
        .count();
    assert_eq!(ticks, 1);
}

#[test]
fn memory_selector_skips_failed_children_on_resume() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let primary = Scripted::new("primary", vec![Ok(NodeStatus::Failure)], log.clone());
    let fallback = Scripted::new(
        "fallback",
        vec![Ok(NodeStatus::Running), Ok(NodeStatus::Success)],
        log.clone(),
    );

    let mut sel = arm_bt::MemSelector::new(vec![Box::new(primary), Box::new(fallback)]);
    let mut bb = Blackboard::new();
    assert_eq!(sel.tick(&ctx(0), &mut bb), Ok(NodeStatus::Running));
    assert_eq!(sel.tick(&ctx(1), &mut bb), Ok(NodeStatus::Success));
    let ticks = log
        .borrow()
        .iter()
        .filter(|e| e.as_str() == "tick:primary")
        .count();
    assert_eq!(ticks, 1);
}

#[test]
fn behavior_tree_resets_root_after_completion() {
    let mut tree = BehaviorTree::new(Box::new(Condition::new(
        |_ctx: &TickContext, bb: &Blackboard| bb.get_by_name::<bool>("go").copied(),
    )));
    tree.blackboard.set_by_name("go", true).unwrap();
    assert_eq!(tree.tick(&ctx(0)), Ok(NodeStatus::Success));
    assert_eq!(tree.last_status(), NodeStatus::Success);

    tree.blackboard.set_by_name("go", false).unwrap();
    assert_eq!(tree.tick(&ctx(1)), Ok(NodeStatus::Failure));
}
