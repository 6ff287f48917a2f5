// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::hresult::HResult;

/// `FormatMessageW` refuses buffers larger than 64K bytes.
#[cfg(windows)]
const MAX_MESSAGE_LEN: usize = 32 * 1024;

#[cfg(windows)]
#[derive(Debug, PartialEq, Eq)]
enum Formatted {
    Message(String),
    TooSmall,
    Missing(u32),
}

#[cfg(windows)]
fn format_message(hr: HResult, capacity: usize) -> Formatted {
    use std::ptr;
    use winapi::shared::winerror::ERROR_INSUFFICIENT_BUFFER;
    use winapi::um::errhandlingapi::GetLastError;
    use winapi::um::winbase::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
    };

    let mut buffer = vec![0u16; capacity];
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            hr.raw() as u32,
            0,
            buffer.as_mut_ptr(),
            buffer.len() as u32,
            ptr::null_mut(),
        )
    };

    if len == 0 {
        let error = unsafe { GetLastError() };
        return if error == ERROR_INSUFFICIENT_BUFFER {
            Formatted::TooSmall
        } else {
            Formatted::Missing(error)
        };
    }

    let message = String::from_utf16_lossy(&buffer[..len as usize]);
    Formatted::Message(message.trim_end().to_owned())
}

/// The message text the OS associates with `hr`, if any.
#[cfg(windows)]
pub fn system_message(hr: HResult) -> Option<String> {
    let mut capacity = 512;
    loop {
        match format_message(hr, capacity) {
            Formatted::Message(message) if message.is_empty() => return None,
            Formatted::Message(message) => return Some(message),
            Formatted::TooSmall if capacity < MAX_MESSAGE_LEN => {
                capacity = (capacity * 8).min(MAX_MESSAGE_LEN);
            }
            Formatted::TooSmall => {
                log::debug!("message for {} exceeds {} characters", hr, MAX_MESSAGE_LEN);
                return None;
            }
            Formatted::Missing(error) => {
                log::debug!("no system message for {} (FormatMessageW error {})", hr, error);
                return None;
            }
        }
    }
}

#[cfg(not(windows))]
pub fn system_message(_hr: HResult) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn no_messages_off_windows() {
        assert_eq!(system_message(HResult(0x8000_4005_u32 as i32)), None);
    }

    #[cfg(windows)]
    #[test]
    fn formats_win32_error() {
        // E_ACCESSDENIED
        let message = system_message(HResult(0x8007_0005_u32 as i32)).unwrap();
        assert!(!message.is_empty());
        assert!(!message.ends_with('\n'));
    }

    #[cfg(windows)]
    #[test]
    fn retries_when_buffer_is_too_small() {
        // E_ACCESSDENIED, "Access is denied."
        let hr = HResult(0x8007_0005_u32 as i32);
        assert_eq!(format_message(hr, 4), Formatted::TooSmall);

        let message = system_message(hr).unwrap();
        assert!(message.chars().count() > 4);
    }

    #[cfg(windows)]
    #[test]
    fn agrees_with_winapi() {
        use winapi::shared::winerror;

        for &raw in &[0, 1, winerror::E_FAIL, winerror::DXGI_ERROR_DEVICE_REMOVED] {
            assert_eq!(HResult(raw).is_success(), winerror::SUCCEEDED(raw));
        }

        macro_rules! same_as_winapi {
            ($($name:ident),* $(,)?) => {{
                let mut dxgi_errors = 0;
                $(
                    assert_eq!(crate::codes::$name, winerror::$name, stringify!($name));
                    if stringify!($name).starts_with("DXGI_ERROR_") {
                        dxgi_errors += 1;
                    }
                )*
                dxgi_errors
            }};
        }

        let checked = same_as_winapi!(
            S_OK,
            S_FALSE,
            E_NOTIMPL,
            E_NOINTERFACE,
            E_POINTER,
            E_ABORT,
            E_FAIL,
            E_UNEXPECTED,
            E_ACCESSDENIED,
            E_HANDLE,
            E_OUTOFMEMORY,
            E_INVALIDARG,
            DXGI_STATUS_OCCLUDED,
            DXGI_ERROR_INVALID_CALL,
            DXGI_ERROR_NOT_FOUND,
            DXGI_ERROR_MORE_DATA,
            DXGI_ERROR_UNSUPPORTED,
            DXGI_ERROR_DEVICE_REMOVED,
            DXGI_ERROR_DEVICE_HUNG,
            DXGI_ERROR_DEVICE_RESET,
            DXGI_ERROR_WAS_STILL_DRAWING,
            DXGI_ERROR_FRAME_STATISTICS_DISJOINT,
            DXGI_ERROR_GRAPHICS_VIDPN_SOURCE_IN_USE,
            DXGI_ERROR_DRIVER_INTERNAL_ERROR,
            DXGI_ERROR_NONEXCLUSIVE,
            DXGI_ERROR_NOT_CURRENTLY_AVAILABLE,
            DXGI_ERROR_REMOTE_CLIENT_DISCONNECTED,
            DXGI_ERROR_REMOTE_OUTOFMEMORY,
            DXGI_ERROR_MODE_CHANGE_IN_PROGRESS,
            DXGI_ERROR_ACCESS_LOST,
            DXGI_ERROR_WAIT_TIMEOUT,
            DXGI_ERROR_SESSION_DISCONNECTED,
            DXGI_ERROR_RESTRICT_TO_OUTPUT_STALE,
            DXGI_ERROR_CANNOT_PROTECT_CONTENT,
            DXGI_ERROR_ACCESS_DENIED,
            DXGI_ERROR_NAME_ALREADY_EXISTS,
            DXGI_ERROR_SDK_COMPONENT_MISSING,
            DXGI_ERROR_NOT_CURRENT,
            DXGI_ERROR_HW_PROTECTION_OUTOFMEMORY,
            DXGI_ERROR_DYNAMIC_CODE_POLICY_VIOLATION,
            DXGI_ERROR_NON_COMPOSITED_UI,
        );

        let in_table = crate::codes::all()
            .iter()
            .filter(|known| known.name.starts_with("DXGI_ERROR_"))
            .count();
        assert_eq!(checked, in_table);
    }
}
