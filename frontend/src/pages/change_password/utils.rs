const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_passwords(old: &str, new: &str, confirm: &str) -> Result<(), String> {
    if old.is_empty() {
        return Err("Please enter your current password".into());
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if new == old {
        return Err("New password must differ from the current one".into());
    }
    if confirm != new {
        return Err("Password confirmation does not match".into());
    }
    Ok(())
}
