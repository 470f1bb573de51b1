use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = reliability::cli::parse();
    app::run(args)
}
