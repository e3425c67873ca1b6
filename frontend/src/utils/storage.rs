use web_sys::Storage;

/// `None` outside a browsing context (workers, or storage disabled).
pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
