//! Demo twin class

use twin_base::{CallArg, DispatchPolicy, InvokeError, MethodTable, TwinClass};

/// A twin that prints whatever it is handed
///
/// One method per dispatch policy, so the demo can show where each call
/// lands.
#[derive(Debug, Default)]
pub struct Probe {
    calls: usize,
}

impl Probe {
    fn print_line(&mut self, label: &str, args: &[CallArg]) -> Result<(), InvokeError> {
        self.calls += 1;
        let line = args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(target: "probe", "[{}] {}", label, line);
        Ok(())
    }

    fn print_test(&mut self, args: &[CallArg]) -> Result<(), InvokeError> {
        self.print_line("both", args)
    }

    fn design_note(&mut self, args: &[CallArg]) -> Result<(), InvokeError> {
        self.print_line("design-only", args)
    }

    fn run_probe(&mut self, args: &[CallArg]) -> Result<(), InvokeError> {
        self.print_line("run-only", args)
    }
}

impl TwinClass for Probe {
    const CLASS_NAME: &'static str = "Probe";

    fn create() -> Self {
        Self::default()
    }

    fn methods() -> MethodTable<Self> {
        MethodTable::new()
            .with_method("print_test", DispatchPolicy::Both, Self::print_test)
            .with_method("design_note", DispatchPolicy::DesignOnly, Self::design_note)
            .with_method("run_probe", DispatchPolicy::RunOnly, Self::run_probe)
    }
}
