mod common;

use common::fixtures::{I2C_SCRIPT, mixed_entries};
use common::{TestResult, i2c_index};
use navindex::{Format, IndexLoader, NavIndex, SerializeOptions, load, serialize};

#[test]
fn test_serialize_reproduces_generator_output() -> TestResult {
    let index = i2c_index()?;
    assert_eq!(index.to_script(), I2C_SCRIPT.trim_end());
    Ok(())
}

#[test]
fn test_load_serialize_load() -> TestResult {
    let entries = load(I2C_SCRIPT)?;
    let text = serialize(&entries);
    assert!(!text.starts_with("var"));
    assert_eq!(load(&text)?, entries);
    Ok(())
}

#[test]
fn test_mixed_entries_round_trip() -> TestResult {
    let entries = mixed_entries();
    assert_eq!(load(&serialize(&entries))?, entries);
    Ok(())
}

#[test]
fn test_json_round_trip() -> TestResult {
    let index = NavIndex::new(Some("mixed".to_string()), mixed_entries());
    let options = SerializeOptions::new().with_format(Format::Json);
    let text = index.to_string_with(&options)?;
    assert!(text.contains("\"var\": \"mixed\""));
    assert_eq!(NavIndex::parse(&text)?, index);

    let compact = index.to_string_with(&options.clone().with_indent(0))?;
    assert!(!compact.contains('\n'));
    assert_eq!(NavIndex::parse(&compact)?, index);
    Ok(())
}

#[test]
fn test_convert_between_formats() -> TestResult {
    let index = i2c_index()?;
    let json = index.to_string_with(&SerializeOptions::new().with_format(Format::Json))?;
    let back = IndexLoader::new().with_format(Format::Json).load_str(&json)?;
    assert_eq!(back.to_script(), index.to_script());
    Ok(())
}

#[test]
fn test_var_name_override_and_layout_options() -> TestResult {
    let index = i2c_index()?;
    let options = SerializeOptions::new()
        .with_var_name("renamed")
        .with_indent(2)
        .with_trailing_newline(true);
    let text = index.to_string_with(&options)?;
    assert!(text.starts_with("var renamed =\n[\n  [ \"I2C_CCRH_FS\""));
    assert!(text.ends_with("];\n"));

    let reloaded = NavIndex::parse(&text)?;
    assert_eq!(reloaded.var_name(), Some("renamed"));
    assert_eq!(reloaded.entries(), index.entries());
    Ok(())
}
