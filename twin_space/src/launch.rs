//! Launching a connected space pair

use crate::channel::{ChannelEndpoint, DuplexChannel};
use crate::config::SpaceConfig;
use crate::design::DesignSpace;
use crate::error::SpaceError;
use crate::run::RunSpace;
use std::thread::{self, JoinHandle};
use twin_base::ClassRegistry;

/// Handle to a launched run space
///
/// Joining surfaces the loop's exit result; a space that halted on a
/// protocol violation reports it here, since the design side never gets a
/// reply channel to hear about it.
pub struct RunSpaceHandle {
    thread: JoinHandle<Result<(), SpaceError>>,
}

impl RunSpaceHandle {
    /// Waits for the run space loop to finish
    pub fn join(self) -> Result<(), SpaceError> {
        match self.thread.join() {
            Ok(result) => result,
            Err(_) => Err(SpaceError::RunSpacePanicked),
        }
    }
}

/// Starts a counterpart run space and returns the connected design space
///
/// The run space runs its command loop on a dedicated thread bound to the
/// far endpoint of a fresh duplex channel. In a full deployment the
/// counterpart would be a separate process started by an external launcher;
/// the protocol does not care, and a thread keeps the pair testable.
///
/// The class registry must name every twin class the design side will
/// mirror; instantiating anything else halts the run space.
pub fn launch(
    classes: ClassRegistry,
    config: SpaceConfig,
) -> Result<(DesignSpace<ChannelEndpoint>, RunSpaceHandle), SpaceError> {
    let (near, far) = DuplexChannel::pair();
    let thread = thread::Builder::new()
        .name("twin-run-space".to_string())
        .spawn(move || RunSpace::new(far, classes, config).run())
        .map_err(|err| SpaceError::Spawn(err.to_string()))?;

    Ok((DesignSpace::new(near), RunSpaceHandle { thread }))
}
