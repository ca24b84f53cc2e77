/// gltut terminal demos
///
/// Controls:
///   - Left drag: rotate the mouse cube
///   - Right drag: move the mouse cube
///   - 1-4: switch scene, R: reset scene
///   - Q/ESC: Quit
///
/// Set RUST_LOG=debug (and redirect stderr) to see log output.
use clap::Parser;
use gltut_terminal::{Cli, DemoConfig, Result, TerminalApp};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = DemoConfig::load(&cli)?;
    log::debug!("demo config: {:?}", config);

    let mut app = TerminalApp::new(cli.demo, config)?;
    app.run()?;

    println!("Thank you for using gltut!");
    Ok(())
}
