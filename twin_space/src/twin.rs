//! Design-side twin handles

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use twin_base::{CallArg, ObjectArg, SharedObject, TwinCell, TwinClass};
use twin_proto::TwinDescriptor;
use twin_types::TwinId;

/// Handle to a twin constructed in the design space
///
/// The design-side instance and its run-side counterpart are distinct
/// objects unified only by the shared identity; no state crosses the
/// channel after construction. Handles are cheap to clone and remain valid
/// for the life of the space that created them.
pub struct Twin<C: TwinClass> {
    id: TwinId,
    cell: Rc<RefCell<TwinCell<C>>>,
}

impl<C: TwinClass> Twin<C> {
    pub(crate) fn new(id: TwinId, cell: Rc<RefCell<TwinCell<C>>>) -> Self {
        Self { id, cell }
    }

    /// Identity shared with the run-side counterpart
    pub fn id(&self) -> TwinId {
        self.id
    }

    /// Descriptor naming this twin's class and identity
    pub fn descriptor(&self) -> TwinDescriptor {
        TwinDescriptor::new(C::CLASS_NAME, self.id)
    }

    /// Turns this twin into a call argument
    ///
    /// On the wire the argument travels as a reference marker; the run side
    /// substitutes its own registered counterpart.
    pub fn as_arg(&self) -> CallArg {
        CallArg::Object(ObjectArg::new(
            self.id,
            C::CLASS_NAME,
            self.cell.clone() as SharedObject,
        ))
    }

    /// Reads the local state
    pub fn with_state<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let cell = self.cell.borrow();
        f(cell.state())
    }

    /// Mutates the local state directly, bypassing dispatch
    pub fn with_state_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut cell = self.cell.borrow_mut();
        f(cell.state_mut())
    }

    pub(crate) fn cell(&self) -> &Rc<RefCell<TwinCell<C>>> {
        &self.cell
    }
}

impl<C: TwinClass> Clone for Twin<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            cell: self.cell.clone(),
        }
    }
}

impl<C: TwinClass> fmt::Debug for Twin<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Twin<{}>({})", C::CLASS_NAME, self.id)
    }
}
