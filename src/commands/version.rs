use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("ipodsync version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
