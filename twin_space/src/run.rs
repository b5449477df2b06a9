//! Run space command loop

use crate::config::SpaceConfig;
use crate::error::SpaceError;
use crate::transport::{Transport, TransportError};
use std::thread;
use twin_base::{decide, CallArg, ClassRegistry, InvokeError, ObjectArg};
use twin_proto::{unpack, ArgValue, Command, InvocationDescriptor, Message, TwinDescriptor};
use twin_registry::ObjectRegistry;
use twin_types::SpaceKind;

/// Command loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Polling and applying messages
    Running,
    /// Terminal; reached by exit, protocol violation, or disconnect
    Stopped,
}

/// The mirrored, executing side of a twin pair
///
/// Wraps the far channel endpoint in a single-threaded command loop.
/// Messages are applied one at a time in arrival order; no second message
/// is touched while one is being handled, so command handlers own the
/// registry without locking. The run space has no send-initiating API: it
/// only reacts.
pub struct RunSpace<T: Transport> {
    transport: T,
    classes: ClassRegistry,
    registry: ObjectRegistry,
    state: LoopState,
    config: SpaceConfig,
}

impl<T: Transport> RunSpace<T> {
    /// Creates a run space over the far channel endpoint
    pub fn new(transport: T, classes: ClassRegistry, config: SpaceConfig) -> Self {
        Self {
            transport,
            classes,
            registry: ObjectRegistry::new(),
            state: LoopState::Running,
            config,
        }
    }

    /// The side this controller represents
    pub fn kind(&self) -> SpaceKind {
        SpaceKind::Run
    }

    /// Current loop state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The registry of mirrored objects (inspection; tests, inventory)
    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Runs the command loop until the space stops
    ///
    /// Polls the channel without blocking; when idle, sleeps one proxy
    /// frame and re-polls. A protocol violation stops the loop and is
    /// returned to the caller; it never panics across the loop boundary.
    pub fn run(&mut self) -> Result<(), SpaceError> {
        while self.state == LoopState::Running {
            if !self.step()? {
                thread::sleep(self.config.frame_delay);
            }
        }
        Ok(())
    }

    /// Processes at most one pending message
    ///
    /// Returns whether a message was consumed, which is what lets tests
    /// drive the loop deterministically without the frame delay. Fatal
    /// errors transition the loop to `Stopped` before being returned;
    /// resolution failures are logged and swallowed here, per the
    /// fire-and-forget contract.
    pub fn step(&mut self) -> Result<bool, SpaceError> {
        let message = match self.transport.try_recv() {
            Ok(Some(message)) => message,
            Ok(None) => return Ok(false),
            Err(TransportError::Disconnected) => {
                tracing::warn!("channel disconnected without exit; stopping loop");
                self.state = LoopState::Stopped;
                return Ok(false);
            }
        };

        match self.apply(message) {
            Ok(()) => Ok(true),
            Err(err) if err.is_fatal() => {
                tracing::error!("protocol violation, halting space: {err}");
                self.state = LoopState::Stopped;
                Err(err)
            }
            Err(err) => {
                tracing::warn!("invocation dropped: {err}");
                Ok(true)
            }
        }
    }

    fn apply(&mut self, message: Message) -> Result<(), SpaceError> {
        let command = unpack(&message)?;
        match command {
            Command::Exit => {
                tracing::info!("exit received, stopping loop");
                self.state = LoopState::Stopped;
                Ok(())
            }
            Command::Log(payload) => {
                tracing::info!(target: "twin_space", "message: {payload}");
                Ok(())
            }
            Command::Eval(_) => {
                // Reserved on the wire; must never crash the loop.
                tracing::warn!("eval command is not supported");
                Ok(())
            }
            Command::Instantiate(descriptor) => self.handle_instantiate(descriptor),
            Command::Invoke(invocation) => self.handle_invoke(invocation),
            Command::Inventory => {
                self.handle_inventory();
                Ok(())
            }
        }
    }

    fn handle_instantiate(&mut self, descriptor: TwinDescriptor) -> Result<(), SpaceError> {
        let object = self.classes.construct(&descriptor.class_name)?;
        self.registry.register(descriptor.id, object)?;
        tracing::debug!(twin = %descriptor.id, class = %descriptor.class_name, "counterpart registered");
        Ok(())
    }

    fn handle_invoke(&mut self, invocation: InvocationDescriptor) -> Result<(), SpaceError> {
        let target = self.registry.resolve(invocation.id)?.clone();
        let (policy, class_name) = {
            let object = target.borrow();
            (object.method_policy(&invocation.method), object.class_name())
        };
        let policy = policy.ok_or_else(|| InvokeError::UnknownMethod {
            class: class_name.to_string(),
            method: invocation.method.clone(),
        })?;

        // Run-side decision: Both and RunOnly execute, DesignOnly is a
        // no-op; nothing is ever re-forwarded from here.
        if !decide(policy, SpaceKind::Run).run_local {
            tracing::debug!(
                twin = %invocation.id,
                method = %invocation.method,
                "design-only method skipped"
            );
            return Ok(());
        }

        let args = self.raise_args(&invocation.args)?;
        target.borrow_mut().invoke(&invocation.method, &args)?;
        Ok(())
    }

    /// Raises wire arguments into call arguments
    ///
    /// Reference markers are substituted for the objects already registered
    /// under their identities; plain values pass through.
    fn raise_args(&self, wire: &[ArgValue]) -> Result<Vec<CallArg>, SpaceError> {
        wire.iter()
            .map(|arg| match arg {
                ArgValue::Data(value) => Ok(CallArg::Data(value.clone())),
                ArgValue::TwinRef(id) => {
                    let object = self.registry.resolve(*id)?.clone();
                    let class_name = object.borrow().class_name().to_string();
                    Ok(CallArg::Object(ObjectArg::new(*id, class_name, object)))
                }
            })
            .collect()
    }

    fn handle_inventory(&self) {
        for (id, object) in self.registry.iter() {
            tracing::info!(target: "twin_space", "identity: {}, object: {}", id, object.borrow().summary());
        }
    }
}
