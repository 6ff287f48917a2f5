// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;

use crate::error::{D3D11Error, D3D11Result};
use crate::hresult::{HResult, HRESULT};

/// Returns `Ok(())` when `result` is a success code, otherwise an
/// `OperationFailed` error carrying the code.
pub fn check_result<R: Into<HResult>>(result: R) -> D3D11Result<()> {
    check(result.into(), None)
}

/// Like [`check_result`], but the error also names `operation`.
pub fn check_result_with<R: Into<HResult>>(result: R, operation: &str) -> D3D11Result<()> {
    check(result.into(), Some(operation))
}

fn check(hr: HResult, operation: Option<&str>) -> D3D11Result<()> {
    if hr.is_success() {
        return Ok(());
    }

    debug!(
        "{} returned {} ({})",
        operation.unwrap_or("D3D11 call"),
        hr,
        hr.name().unwrap_or("unknown")
    );
    Err(D3D11Error::new(hr, operation))
}

/// Method-call form of the checks, for raw and decoded result codes.
pub trait HResultExt: Sized {
    fn check(self) -> D3D11Result<()>;

    fn check_with(self, operation: &str) -> D3D11Result<()>;
}

impl HResultExt for HRESULT {
    fn check(self) -> D3D11Result<()> {
        check_result(self)
    }

    fn check_with(self, operation: &str) -> D3D11Result<()> {
        check_result_with(self, operation)
    }
}

impl HResultExt for HResult {
    fn check(self) -> D3D11Result<()> {
        check_result(self)
    }

    fn check_with(self, operation: &str) -> D3D11Result<()> {
        check_result_with(self, operation)
    }
}

/// Returns early from the enclosing function when the result code is a
/// failure, converting the error with `From`.
#[macro_export]
macro_rules! check_hr {
    ($hr:expr) => {
        if let Err(err) = $crate::check_result($hr) {
            return Err(::core::convert::From::from(err));
        }
    };
    ($hr:expr, $operation:expr) => {
        if let Err(err) = $crate::check_result_with($hr, $operation) {
            return Err(::core::convert::From::from(err));
        }
    };
}
