use crate::resolver::{ItemHandle, ShellResolver};

// E_NOTIMPL; there is no shell namespace to ask on this platform
const E_NOTIMPL: i32 = 0x80004001u32 as i32;

pub struct StubResolver {
}

impl StubResolver {
    pub fn new() -> Self {
        StubResolver {  }
    }
}

impl ShellResolver for StubResolver {
    fn parse(&self, _path: &str, _request: u32) -> Result<(ItemHandle, u32), i32> {
        Err(E_NOTIMPL)
    }

    fn release(&self, _item: ItemHandle) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_always_fails() {
        let resolver = StubResolver::new();
        match resolver.parse(r"C:\Windows", 0xFFFFFFFF) {
            Err(status) => assert_eq!(status as u32, 0x80004001),
            Ok(_) => panic!("stub resolver produced an item"),
        }
    }
}
