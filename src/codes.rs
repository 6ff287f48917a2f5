// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Well-known result codes returned by Direct3D11, DXGI and COM.

use crate::hresult::{HResult, HRESULT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownCode {
    pub code: HRESULT,
    pub name: &'static str,
    pub description: &'static str,
}

macro_rules! known_codes {
    ($($name:ident = $value:literal => $description:literal,)*) => {
        $(
            pub const $name: HRESULT = $value as HRESULT;
        )*

        static KNOWN_CODES: &[KnownCode] = &[
            $(
                KnownCode {
                    code: $name,
                    name: stringify!($name),
                    description: $description,
                },
            )*
        ];
    };
}

known_codes! {
    S_OK = 0x0000_0000_u32 => "The operation completed successfully",
    S_FALSE = 0x0000_0001_u32 => "The operation completed successfully but returned a negative condition",
    DXGI_STATUS_OCCLUDED = 0x087A_0001_u32 => "The window content is not visible",
    E_NOTIMPL = 0x8000_4001_u32 => "Not implemented",
    E_NOINTERFACE = 0x8000_4002_u32 => "No such interface supported",
    E_POINTER = 0x8000_4003_u32 => "Invalid pointer",
    E_ABORT = 0x8000_4004_u32 => "Operation aborted",
    E_FAIL = 0x8000_4005_u32 => "Unspecified error",
    E_UNEXPECTED = 0x8000_FFFF_u32 => "Catastrophic failure",
    E_ACCESSDENIED = 0x8007_0005_u32 => "General access denied error",
    E_HANDLE = 0x8007_0006_u32 => "Invalid handle",
    E_OUTOFMEMORY = 0x8007_000E_u32 => "Ran out of memory",
    E_INVALIDARG = 0x8007_0057_u32 => "One or more arguments are invalid",
    DXGI_ERROR_INVALID_CALL = 0x887A_0001_u32 => "The method call is invalid, a parameter may not be valid",
    DXGI_ERROR_NOT_FOUND = 0x887A_0002_u32 => "The object was not found",
    DXGI_ERROR_MORE_DATA = 0x887A_0003_u32 => "The caller did not supply a sufficiently large buffer",
    DXGI_ERROR_UNSUPPORTED = 0x887A_0004_u32 => "The requested functionality is not supported by the device or the driver",
    DXGI_ERROR_DEVICE_REMOVED = 0x887A_0005_u32 => "The video card has been physically removed from the system, or a driver upgrade occurred",
    DXGI_ERROR_DEVICE_HUNG = 0x887A_0006_u32 => "The device failed due to a badly formed command",
    DXGI_ERROR_DEVICE_RESET = 0x887A_0007_u32 => "The device failed and must be destroyed and recreated",
    DXGI_ERROR_WAS_STILL_DRAWING = 0x887A_000A_u32 => "The GPU was busy when the operation was requested",
    DXGI_ERROR_FRAME_STATISTICS_DISJOINT = 0x887A_000B_u32 => "An event interrupted the gathering of presentation statistics",
    DXGI_ERROR_GRAPHICS_VIDPN_SOURCE_IN_USE = 0x887A_000C_u32 => "The output is in use by another application",
    DXGI_ERROR_DRIVER_INTERNAL_ERROR = 0x887A_0020_u32 => "The driver encountered a problem and was put into the device removed state",
    DXGI_ERROR_NONEXCLUSIVE = 0x887A_0021_u32 => "A global counter resource is in use and cannot be used at this time",
    DXGI_ERROR_NOT_CURRENTLY_AVAILABLE = 0x887A_0022_u32 => "The resource or request is not currently available",
    DXGI_ERROR_REMOTE_CLIENT_DISCONNECTED = 0x887A_0023_u32 => "The remote client disconnected",
    DXGI_ERROR_REMOTE_OUTOFMEMORY = 0x887A_0024_u32 => "The remote device ran out of memory",
    DXGI_ERROR_MODE_CHANGE_IN_PROGRESS = 0x887A_0025_u32 => "A display mode change is in progress",
    DXGI_ERROR_ACCESS_LOST = 0x887A_0026_u32 => "The desktop duplication interface is invalid",
    DXGI_ERROR_WAIT_TIMEOUT = 0x887A_0027_u32 => "The time-out interval elapsed before the next desktop frame was available",
    DXGI_ERROR_SESSION_DISCONNECTED = 0x887A_0028_u32 => "The Remote Desktop Services session is disconnected",
    DXGI_ERROR_RESTRICT_TO_OUTPUT_STALE = 0x887A_0029_u32 => "The output restriction of the swap chain is no longer valid",
    DXGI_ERROR_CANNOT_PROTECT_CONTENT = 0x887A_002A_u32 => "Content protection is not available for the swap chain",
    DXGI_ERROR_ACCESS_DENIED = 0x887A_002B_u32 => "The shared resource was accessed without the required rights",
    DXGI_ERROR_NAME_ALREADY_EXISTS = 0x887A_002C_u32 => "A shared resource with the supplied name already exists",
    DXGI_ERROR_SDK_COMPONENT_MISSING = 0x887A_002D_u32 => "An SDK component required by the operation is missing",
    DXGI_ERROR_NOT_CURRENT = 0x887A_002E_u32 => "The DXGI objects the application created are no longer current",
    DXGI_ERROR_HW_PROTECTION_OUTOFMEMORY = 0x887A_0030_u32 => "Insufficient hardware-protected memory is available",
    DXGI_ERROR_DYNAMIC_CODE_POLICY_VIOLATION = 0x887A_0031_u32 => "Creating this device would violate the process's dynamic code policy",
    DXGI_ERROR_NON_COMPOSITED_UI = 0x887A_0032_u32 => "The operation failed because the compositor is not in control of the output",
    D3D11_ERROR_TOO_MANY_UNIQUE_STATE_OBJECTS = 0x887C_0001_u32 => "There are too many unique instances of a state object type",
    D3D11_ERROR_FILE_NOT_FOUND = 0x887C_0002_u32 => "The file was not found",
    D3D11_ERROR_TOO_MANY_UNIQUE_VIEW_OBJECTS = 0x887C_0003_u32 => "There are too many unique instances of a view object type",
    D3D11_ERROR_DEFERRED_CONTEXT_MAP_WITHOUT_INITIAL_DISCARD = 0x887C_0004_u32 => "Map was not called with D3D11_MAP_WRITE_DISCARD first on a deferred context resource",
}

pub fn lookup(hr: HResult) -> Option<&'static KnownCode> {
    KNOWN_CODES.iter().find(|known| known.code == hr.raw())
}

pub fn all() -> &'static [KnownCode] {
    KNOWN_CODES
}
