#[cfg(windows)]
pub mod shell32;
#[cfg(not(windows))]
pub mod stub;

// Opaque reference to a parsed shell item. Deliberately not Clone or
// Copy: release() consumes it, so a handle cannot be released twice.
pub struct ItemHandle(usize);

impl ItemHandle {
    pub fn from_raw(raw: usize) -> Self {
        ItemHandle(raw)
    }

    pub fn as_raw(&self) -> usize {
        self.0
    }
}

pub trait ShellResolver {
    fn parse(&self, path: &str, request: u32) -> Result<(ItemHandle, u32), i32>;

    fn release(&self, item: ItemHandle);
}

#[cfg(windows)]
pub fn platform_resolver() -> Box<dyn ShellResolver> {
    Box::new(shell32::Shell32Resolver::new())
}

#[cfg(not(windows))]
pub fn platform_resolver() -> Box<dyn ShellResolver> {
    Box::new(stub::StubResolver::new())
}
