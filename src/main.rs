use std::env;

use vush::flags::Flags;
use vush::shell::Shell;

fn main() -> Result<(), vush::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("vush {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let default_level = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("VUSH_LOG", default_level))
        .init();

    let mut shell = Shell::new(flags)?;
    shell.run()
}
