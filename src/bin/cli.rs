// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    fpl_compare::cli::run()
}
