use std::io;

use noughts::Engine;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Protocol responses go to stdout, keep the logs out of the way.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut output = io::stdout().lock();
    if std::env::args().nth(1).as_deref() == Some("selfplay") {
        return noughts::selfplay(&mut output);
    }
    let mut input = io::stdin().lock();
    Engine::new(&mut input, &mut output).run()
}
