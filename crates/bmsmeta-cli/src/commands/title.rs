//! Title command: strip a trailing variant tag.

use anyhow::Result;
use bmsmeta_core::recover_title_suffix;

pub fn run(text: &str) -> Result<()> {
    println!("{}", recover_title_suffix(text));
    Ok(())
}
