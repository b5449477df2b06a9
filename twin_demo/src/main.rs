//! # Twin Demo
//!
//! Drives the twin protocol end to end: creates a design space with a live
//! run space counterpart, mirrors three twins, inventories the run space,
//! and issues calls under each dispatch policy.

mod probe;

use probe::Probe;
use serde_json::json;
use std::process;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use twin_base::{CallArg, ClassRegistry};
use twin_space::{launch, SpaceConfig, SpaceError};

struct DemoConfig {
    frame_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_delay: SpaceConfig::default().frame_delay,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    if let Err(e) = run_demo(config) {
        eprintln!("Demo failed: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<DemoConfig, String> {
    let mut config = DemoConfig::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--frame-delay-ms" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --frame-delay-ms".to_string());
                }
                let millis: u64 = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid frame delay: {}", args[i]))?;
                config.frame_delay = Duration::from_millis(millis);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("      --frame-delay-ms <MS>  Idle poll interval of the run space");
    eprintln!("  -h, --help                 Print this help");
}

fn run_demo(config: DemoConfig) -> Result<(), SpaceError> {
    let mut classes = ClassRegistry::new();
    classes.register::<Probe>()?;

    let space_config = SpaceConfig {
        frame_delay: config.frame_delay,
    };
    let (mut space, handle) = launch(classes, space_config)?;

    // Mirror some objects, then inventory them on both sides.
    let tb_1 = space.instantiate::<Probe>()?;
    let tb_2 = space.instantiate::<Probe>()?;
    let tb_3 = space.instantiate::<Probe>()?;
    space.inventory_design_space();
    space.inventory_run_space()?;
    space.send_log(json!("design space is up"))?;

    // Plain-value calls under each policy.
    space.invoke(&tb_1, "print_test", &[CallArg::text("Hello"), CallArg::text("World")])?;
    space.invoke(
        &tb_2,
        "print_test",
        &[CallArg::text("Hello"), CallArg::text("World again")],
    )?;
    space.invoke(&tb_2, "design_note", &[CallArg::text("design side only")])?;
    space.invoke(&tb_3, "run_probe", &[CallArg::text("run side only")])?;

    // Twin-valued arguments: each arrives remotely as the registered
    // counterpart with the same identity.
    space.invoke(
        &tb_1,
        "print_test",
        &[CallArg::text("Twin 1 printing Twin 1"), tb_1.as_arg()],
    )?;
    space.invoke(
        &tb_1,
        "print_test",
        &[CallArg::text("Twin 1 printing Twin 2"), tb_2.as_arg()],
    )?;
    space.invoke(
        &tb_3,
        "print_test",
        &[CallArg::text("Twin 3 printing Twin 1"), tb_1.as_arg()],
    )?;

    // Let the run space drain a few frames before it is told to stop, so
    // its log lines land before ours do.
    thread::sleep(config.frame_delay * 4);

    space.exit()?;
    handle.join()
}
