//! # tipcalc
//!
//! Entry point for the terminal tip calculator. The setup lives in
//! `lib.rs` so it can be tested.

fn main() -> anyhow::Result<()> {
    tipcalc_cli::run()?;
    Ok(())
}
