// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Checks for the `HRESULT` codes returned by Direct3D11 and DXGI calls.
//!
//! ```
//! use d3d11_check::{check_result_with, codes};
//!
//! assert!(check_result_with(codes::S_OK, "CreateDevice").is_ok());
//!
//! let err = check_result_with(codes::DXGI_ERROR_DEVICE_REMOVED, "Present").unwrap_err();
//! assert!(err.to_string().contains("0x887A0005"));
//! ```

pub mod check;
pub mod codes;
pub mod error;
pub mod hresult;
pub mod system;

pub use crate::check::{check_result, check_result_with, HResultExt};
pub use crate::error::{
    error_if_failed_else_unit, error_if_failed_else_unit_with, error_if_failed_else_value,
    error_if_failed_else_value_with, D3D11Error, D3D11Result, D3DResult,
};
pub use crate::hresult::{Facility, HResult, HRESULT};
