fn main() -> anyhow::Result<()> {
    sheetkit::run()?;
    Ok(())
}
