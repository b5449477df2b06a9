//! End-to-end scenario: a design space driving a live run space thread.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};
use twin_base::{
    CallArg, ClassRegistry, DispatchPolicy, InvokeError, MethodTable, TwinClass,
};
use twin_space::{launch, DuplexChannel, LoopState, RunSpace, SpaceConfig, Transport};

/// Both sides of the pair live in this test process, so one process-global
/// sink observes design-local and run-local executions alike.
static SINK: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn record(line: String) {
    SINK.lock().unwrap().push(line);
}

fn occurrences(token: &str) -> usize {
    SINK.lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(token))
        .count()
}

/// Polls the sink until `token` has been recorded `expected` times.
fn wait_for(token: &str, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if occurrences(token) >= expected {
            return;
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!(
        "timed out waiting for {} occurrence(s) of {:?}, saw {}",
        expected,
        token,
        occurrences(token)
    );
}

#[derive(Debug, Default)]
struct Echo;

impl Echo {
    fn echo(&mut self, args: &[CallArg]) -> Result<(), InvokeError> {
        let line = args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        record(line);
        Ok(())
    }
}

impl TwinClass for Echo {
    const CLASS_NAME: &'static str = "Echo";

    fn create() -> Self {
        Self
    }

    fn methods() -> MethodTable<Self> {
        MethodTable::new()
            .with_method("echo", DispatchPolicy::Both, Self::echo)
            .with_method("echo_remote", DispatchPolicy::RunOnly, Self::echo)
    }
}

fn echo_classes() -> ClassRegistry {
    let mut classes = ClassRegistry::new();
    classes.register::<Echo>().unwrap();
    classes
}

fn fast_config() -> SpaceConfig {
    SpaceConfig {
        frame_delay: Duration::from_millis(1),
    }
}

#[test]
fn test_design_space_drives_run_space() {
    let (mut space, handle) = launch(echo_classes(), fast_config()).unwrap();

    let a = space.instantiate::<Echo>().unwrap();
    let b = space.instantiate::<Echo>().unwrap();
    let c = space.instantiate::<Echo>().unwrap();
    assert_eq!(space.twin_count(), 3);
    space.inventory_run_space().unwrap();

    // Both policy: the design side records immediately, the counterpart
    // within a poll interval.
    space.invoke(&a, "echo", &[CallArg::text("e2e-X")]).unwrap();
    assert!(occurrences("e2e-X") >= 1);
    wait_for("e2e-X", 2);

    // A twin argument arrives at the run side as its registered
    // counterpart, printed under the same identity.
    space
        .invoke(&a, "echo", &[CallArg::text("e2e-ref"), b.as_arg()])
        .unwrap();
    wait_for(&format!("e2e-ref Echo({})", b.id()), 2);

    // RunOnly: nothing recorded locally, exactly one remote execution.
    space
        .invoke(&c, "echo_remote", &[CallArg::text("e2e-runonly")])
        .unwrap();
    assert_eq!(occurrences("e2e-runonly"), 0);
    wait_for("e2e-runonly", 1);
    assert_eq!(occurrences("e2e-runonly"), 1);

    // Exit is applied after everything queued before it.
    space.exit().unwrap();
    handle.join().unwrap();
}

#[test]
fn test_protocol_violation_surfaces_on_join() {
    let (mut near, far) = DuplexChannel::pair();
    let thread = thread::spawn(move || {
        let mut space = RunSpace::new(far, echo_classes(), fast_config());
        let result = space.run();
        (space.state(), result)
    });

    let mut bogus = twin_proto::pack(twin_proto::Command::Exit).unwrap();
    bogus.command = "space.bogus".to_string();
    near.send(bogus).unwrap();

    let (state, result) = thread.join().unwrap();
    assert_eq!(state, LoopState::Stopped);
    assert!(result.unwrap_err().is_fatal());
}
