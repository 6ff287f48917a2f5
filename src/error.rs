// Copyright © 2019 piet-dx12 developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use thiserror::Error;

use crate::check::{check_result, check_result_with};
use crate::hresult::{HResult, HRESULT};

/// Value paired with the result code of the call that produced it, the way
/// thin COM wrappers return them.
pub type D3DResult<T> = (T, HRESULT);

pub type D3D11Result<T> = Result<T, D3D11Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum D3D11Error {
    #[error(
        "D3D11 call{} failed: {}",
        OperationTag(.operation.as_deref()),
        .code.diagnose()
    )]
    OperationFailed {
        code: HResult,
        operation: Option<String>,
    },
}

impl D3D11Error {
    pub fn new(code: HResult, operation: Option<&str>) -> D3D11Error {
        D3D11Error::OperationFailed {
            code,
            operation: operation.map(str::to_owned),
        }
    }

    pub fn code(&self) -> HResult {
        match self {
            D3D11Error::OperationFailed { code, .. } => *code,
        }
    }

    pub fn operation(&self) -> Option<&str> {
        match self {
            D3D11Error::OperationFailed { operation, .. } => operation.as_deref(),
        }
    }
}

struct OperationTag<'a>(Option<&'a str>);

impl fmt::Display for OperationTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(operation) => write!(f, " `{}`", operation),
            None => Ok(()),
        }
    }
}

pub fn error_if_failed_else_value<T>(result: D3DResult<T>) -> D3D11Result<T> {
    let (result_value, hresult) = result;
    check_result(hresult)?;
    Ok(result_value)
}

pub fn error_if_failed_else_value_with<T>(result: D3DResult<T>, operation: &str) -> D3D11Result<T> {
    let (result_value, hresult) = result;
    check_result_with(hresult, operation)?;
    Ok(result_value)
}

pub fn error_if_failed_else_unit(hresult: HRESULT) -> D3D11Result<()> {
    check_result(hresult)
}

pub fn error_if_failed_else_unit_with(hresult: HRESULT, operation: &str) -> D3D11Result<()> {
    check_result_with(hresult, operation)
}
