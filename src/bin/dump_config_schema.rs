use anyhow::Result;

fn main() -> Result<()> {
    println!("{}", airtype::Config::json_schema()?);
    Ok(())
}
