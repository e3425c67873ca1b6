pub fn validate_profile(full_name: &str) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Please enter your full name".into());
    }
    Ok(())
}

pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn full_name_is_required() {
        assert!(validate_profile("  ").is_err());
        assert!(validate_profile("Ada Lovelace").is_ok());
    }

    #[wasm_bindgen_test]
    fn optional_drops_blank_values() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" Berlin ".into()), Some("Berlin".into()));
    }
}
