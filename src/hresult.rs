// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::codes::{self, KnownCode};
use crate::system;

/// Raw result code, identical to `winapi::shared::winerror::HRESULT`.
#[allow(clippy::upper_case_acronyms)]
pub type HRESULT = i32;

const SEVERITY_BIT: u32 = 0x8000_0000;
const FACILITY_WIN32: u32 = 7;

/// A decoded view over a raw `HRESULT`.
///
/// Layout: bit 31 is the severity (1 = failure), bits 16..=28 the facility,
/// bits 0..=15 the code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HResult(pub HRESULT);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facility {
    Null,
    Rpc,
    Dispatch,
    Storage,
    Itf,
    Win32,
    Windows,
    Dxgi,
    DxgiDdi,
    Direct3D11,
    Other(u16),
}

impl Facility {
    pub fn from_raw(raw: u16) -> Facility {
        match raw {
            0 => Facility::Null,
            1 => Facility::Rpc,
            2 => Facility::Dispatch,
            3 => Facility::Storage,
            4 => Facility::Itf,
            7 => Facility::Win32,
            8 => Facility::Windows,
            0x87a => Facility::Dxgi,
            0x87b => Facility::DxgiDdi,
            0x87c => Facility::Direct3D11,
            other => Facility::Other(other),
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Facility::Null => f.write_str("NULL"),
            Facility::Rpc => f.write_str("RPC"),
            Facility::Dispatch => f.write_str("DISPATCH"),
            Facility::Storage => f.write_str("STORAGE"),
            Facility::Itf => f.write_str("ITF"),
            Facility::Win32 => f.write_str("WIN32"),
            Facility::Windows => f.write_str("WINDOWS"),
            Facility::Dxgi => f.write_str("DXGI"),
            Facility::DxgiDdi => f.write_str("DXGI_DDI"),
            Facility::Direct3D11 => f.write_str("D3D11"),
            Facility::Other(raw) => write!(f, "0x{:03X}", raw),
        }
    }
}

impl HResult {
    pub const fn from_raw(raw: HRESULT) -> HResult {
        HResult(raw)
    }

    /// Equivalent of `HRESULT_FROM_WIN32`.
    pub const fn from_win32(error: u32) -> HResult {
        if error as i32 <= 0 {
            HResult(error as i32)
        } else {
            HResult(((error & 0xffff) | (FACILITY_WIN32 << 16) | SEVERITY_BIT) as i32)
        }
    }

    pub const fn raw(self) -> HRESULT {
        self.0
    }

    /// `SUCCEEDED`: any non-negative value, so `S_FALSE` and the DXGI status
    /// codes count as success.
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }

    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    pub const fn severity(self) -> u8 {
        ((self.0 as u32) >> 31) as u8
    }

    pub const fn facility_raw(self) -> u16 {
        (((self.0 as u32) >> 16) & 0x1fff) as u16
    }

    pub fn facility(self) -> Facility {
        Facility::from_raw(self.facility_raw())
    }

    pub const fn code(self) -> u16 {
        (self.0 as u32 & 0xffff) as u16
    }

    pub fn known(self) -> Option<&'static KnownCode> {
        codes::lookup(self)
    }

    pub fn name(self) -> Option<&'static str> {
        self.known().map(|known| known.name)
    }

    pub fn description(self) -> Option<&'static str> {
        self.known().map(|known| known.description)
    }

    /// Human-readable decoding used in error messages.
    pub fn diagnose(self) -> Diagnosis {
        Diagnosis(self)
    }
}

impl From<HRESULT> for HResult {
    fn from(raw: HRESULT) -> HResult {
        HResult(raw)
    }
}

impl From<HResult> for HRESULT {
    fn from(hr: HResult) -> HRESULT {
        hr.0
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}

impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "HResult({}, {})", self, name),
            None => write!(f, "HResult({})", self),
        }
    }
}

impl fmt::UpperHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&(self.0 as u32), f)
    }
}

impl fmt::LowerHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&(self.0 as u32), f)
    }
}

pub struct Diagnosis(HResult);

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hr = self.0;
        match hr.known() {
            Some(known) => write!(f, "{} ({}): {}", known.name, hr, known.description),
            None => {
                write!(
                    f,
                    "unknown ({}, facility {}, severity {})",
                    hr,
                    hr.facility(),
                    hr.severity()
                )?;
                if let Some(message) = system::system_message(hr) {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }
    }
}
