use anyhow::Result;
use console_chess::console::ConsoleHandler;

fn main() -> Result<()> {
    env_logger::init();
    let mut console = ConsoleHandler::new();
    console.run()
}
