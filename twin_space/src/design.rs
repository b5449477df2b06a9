//! Design space controller

use crate::error::SpaceError;
use crate::transport::Transport;
use crate::twin::Twin;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use twin_base::{decide, CallArg, InvokeError, SharedObject, TwinCell, TwinClass, TwinObject};
use twin_proto::{pack, Command, InvocationDescriptor, TwinDescriptor};
use twin_types::{SpaceKind, TwinId};

/// The authoritative, originating side of a twin pair
///
/// Owns the near endpoint of the channel and anchors every twin it
/// constructs, both to keep the objects alive and to let design-local
/// dispatch hand handlers the actual instances. All twin construction and
/// method dispatch go through this value; there is no ambient space.
pub struct DesignSpace<T: Transport> {
    transport: T,
    anchors: HashMap<TwinId, SharedObject>,
}

impl<T: Transport> DesignSpace<T> {
    /// Creates a design space over the near channel endpoint
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            anchors: HashMap::new(),
        }
    }

    /// The side this controller represents
    pub fn kind(&self) -> SpaceKind {
        SpaceKind::Design
    }

    /// Packs and sends one command, fire-and-forget
    pub fn send_command(&mut self, command: Command) -> Result<(), SpaceError> {
        let message = pack(command)?;
        self.transport.send(message)?;
        Ok(())
    }

    /// Constructs a twin, mirroring it into the run space
    ///
    /// Mints a fresh identity, anchors the local instance, and sends one
    /// instantiate message carrying the class name and the identity.
    pub fn instantiate<C: TwinClass>(&mut self) -> Result<Twin<C>, SpaceError> {
        let id = TwinId::new();
        let cell = Rc::new(RefCell::new(TwinCell::<C>::new()));
        debug_assert!(!self.anchors.contains_key(&id));
        self.anchors.insert(id, cell.clone() as SharedObject);

        self.send_command(Command::Instantiate(TwinDescriptor::new(C::CLASS_NAME, id)))?;
        tracing::debug!(twin = %id, class = C::CLASS_NAME, "twin instantiated");
        Ok(Twin::new(id, cell))
    }

    /// Dispatches a method call on a twin per its policy
    ///
    /// Looks up the method's policy, decides for the design side, executes
    /// locally when the decision says so, and forwards an invoke message
    /// with wire-lowered arguments when it says to. Forwarding never waits
    /// for a result.
    pub fn invoke<C: TwinClass>(
        &mut self,
        twin: &Twin<C>,
        method: &str,
        args: &[CallArg],
    ) -> Result<(), SpaceError> {
        let policy = twin
            .cell()
            .borrow()
            .method_policy(method)
            .ok_or_else(|| InvokeError::UnknownMethod {
                class: C::CLASS_NAME.to_string(),
                method: method.to_string(),
            })?;
        let decision = decide(policy, SpaceKind::Design);

        if decision.run_local {
            twin.cell().borrow_mut().invoke(method, args)?;
        }
        if decision.forward {
            let wire_args = args.iter().map(CallArg::to_wire).collect();
            self.send_command(Command::Invoke(InvocationDescriptor::new(
                twin.id(),
                method,
                wire_args,
            )))?;
        }
        Ok(())
    }

    /// Sends a log payload for the run space to record
    pub fn send_log(&mut self, payload: impl Into<Value>) -> Result<(), SpaceError> {
        self.send_command(Command::Log(payload.into()))
    }

    /// Asks the run space to dump its object registry
    pub fn inventory_run_space(&mut self) -> Result<(), SpaceError> {
        self.send_command(Command::Inventory)
    }

    /// Dumps this space's own twins, one line per anchor
    pub fn inventory_design_space(&self) {
        for (id, object) in &self.anchors {
            tracing::info!(target: "twin_space", "identity: {}, object: {}", id, object.borrow().summary());
        }
    }

    /// Number of twins constructed in this space
    pub fn twin_count(&self) -> usize {
        self.anchors.len()
    }

    /// Tells the run space to stop its loop
    ///
    /// Queued messages are processed first; exit is applied in arrival
    /// order like everything else.
    pub fn exit(&mut self) -> Result<(), SpaceError> {
        self.send_command(Command::Exit)
    }
}
