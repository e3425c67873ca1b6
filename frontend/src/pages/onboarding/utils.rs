pub const COMPANY_SIZES: &[(&str, &str)] = &[
    ("1-10", "1-10 employees"),
    ("11-50", "11-50 employees"),
    ("51-200", "51-200 employees"),
    ("201-500", "201-500 employees"),
    ("500+", "More than 500 employees"),
];

pub fn validate_company_setup(name: &str, industry: &str, size: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your company name".into());
    }
    if industry.trim().is_empty() {
        return Err("Please enter your industry".into());
    }
    if size.is_empty() {
        return Err("Please select a company size".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn requires_name_industry_and_size() {
        assert!(validate_company_setup("", "Tech", "1-10").is_err());
        assert!(validate_company_setup("Acme", "  ", "1-10").is_err());
        assert!(validate_company_setup("Acme", "Tech", "").is_err());
        assert!(validate_company_setup("Acme", "Tech", "1-10").is_ok());
    }

    #[wasm_bindgen_test]
    fn size_options_are_unique() {
        let mut values: Vec<&str> = COMPANY_SIZES.iter().map(|(v, _)| *v).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), COMPANY_SIZES.len());
    }
}
