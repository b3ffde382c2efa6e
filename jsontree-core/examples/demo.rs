use jsontree_core::{parse, Value};

fn main() -> jsontree_core::Result<()> {
    let input = r#"{"test": { "number": 45.54545, "string": "hi there!" }, "boolean": true }"#;

    let data = parse(input)?;
    println!("{}", data);

    let test: Value = data["test"].clone();
    println!("{}", test.to_text(-1));

    let s: &str = (&data["test"]["string"]).try_into()?;
    let d: f64 = (&data["test"]["number"]).try_into()?;
    let b: bool = (&data["boolean"]).try_into()?;

    println!("{} {} {}", s, d, b);
    Ok(())
}
