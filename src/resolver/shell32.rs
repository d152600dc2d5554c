use std::ffi::c_void;

use windows::core::PCWSTR;
use windows::Win32::System::Com::{
    CoInitializeEx, CoTaskMemFree, CoUninitialize, COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::SHParseDisplayName;
use windows::Win32::UI::Shell::Common::ITEMIDLIST;

use crate::resolver::{ItemHandle, ShellResolver};

pub struct Shell32Resolver {
    com_initialized: bool,
}

impl Shell32Resolver {
    pub fn new() -> Self {
        // S_FALSE still requires the matching CoUninitialize, and
        // HRESULT::is_ok() covers it
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        Shell32Resolver {
            com_initialized: hr.is_ok(),
        }
    }
}

impl ShellResolver for Shell32Resolver {
    fn parse(&self, path: &str, request: u32) -> Result<(ItemHandle, u32), i32> {
        let wide = to_wide(path);
        let mut pidl: *mut ITEMIDLIST = std::ptr::null_mut();
        let mut mask: u32 = 0;
        let parsed = unsafe {
            SHParseDisplayName(PCWSTR(wide.as_ptr()), None, &mut pidl, request, Some(&mut mask))
        };
        match parsed {
            Ok(()) => Ok((ItemHandle::from_raw(pidl as usize), mask)),
            Err(err) => Err(err.code().0),
        }
    }

    fn release(&self, item: ItemHandle) {
        // the PIDL from SHParseDisplayName is task memory
        unsafe { CoTaskMemFree(Some(item.as_raw() as *const c_void)) };
    }
}

impl Drop for Shell32Resolver {
    fn drop(&mut self) {
        if self.com_initialized {
            unsafe { CoUninitialize() };
        }
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    let mut wide: Vec<u16> = s.encode_utf16().collect();
    wide.push(0);
    wide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_is_nul_terminated() {
        assert_eq!(to_wide("C:"), vec![0x0043, 0x003A, 0x0000]);
        assert_eq!(to_wide(""), vec![0x0000]);
    }
}
