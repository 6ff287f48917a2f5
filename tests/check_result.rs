use d3d11_check::codes::{D3D11_ERROR_FILE_NOT_FOUND, DXGI_ERROR_DEVICE_REMOVED, S_FALSE, S_OK};
use d3d11_check::{check_hr, check_result, check_result_with, D3D11Error, HResult, HResultExt};

#[derive(Debug)]
enum RendererError {
    Device(D3D11Error),
}

impl From<D3D11Error> for RendererError {
    fn from(err: D3D11Error) -> Self {
        RendererError::Device(err)
    }
}

fn create_device(hr: i32) -> Result<&'static str, RendererError> {
    check_hr!(hr, "CreateDevice");
    Ok("device")
}

#[test]
fn success_returns_normally() {
    assert!(check_result(S_OK).is_ok());
    assert!(check_result(S_FALSE).is_ok());
    assert!(check_result_with(S_OK, "CreateDevice").is_ok());
}

#[test]
fn failure_without_label_names_code() {
    let err = check_result(DXGI_ERROR_DEVICE_REMOVED).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0x887A0005"));
    assert!(message.contains("DXGI_ERROR_DEVICE_REMOVED"));
    assert!(!message.contains('`'));
}

#[test]
fn failure_with_label_names_code_and_operation() {
    let err = check_result_with(DXGI_ERROR_DEVICE_REMOVED, "CreateDevice").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0x887A0005"));
    assert!(message.contains("CreateDevice"));
}

#[test]
fn unknown_failure_is_still_reported() {
    let hr = HResult(0x887C_00FF_u32 as i32);
    let err = hr.check().unwrap_err();
    assert!(err.to_string().contains("unknown (0x887C00FF, facility D3D11, severity 1)"));
}

#[test]
fn errors_convert_into_caller_types() {
    assert_eq!(create_device(S_OK).unwrap(), "device");

    match create_device(D3D11_ERROR_FILE_NOT_FOUND) {
        Err(RendererError::Device(err)) => {
            assert_eq!(err.operation(), Some("CreateDevice"));
            assert_eq!(err.code().name(), Some("D3D11_ERROR_FILE_NOT_FOUND"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn checks_run_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let op = format!("Draw{}", i);
                DXGI_ERROR_DEVICE_REMOVED.check_with(&op).unwrap_err()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let err = handle.join().unwrap();
        assert_eq!(err.operation(), Some(format!("Draw{}", i).as_str()));
    }
}

#[test]
fn unknown_dxgi_failure_reports_dxgi_facility() {
    let err = check_result(0x887A_00FF_u32 as i32).unwrap_err();
    assert!(err.to_string().contains("unknown (0x887A00FF, facility DXGI, severity 1)"));
}

#[test]
fn mode_change_in_progress_is_named() {
    let err = check_result(0x887A_0025_u32 as i32).unwrap_err();
    assert!(err.to_string().contains("DXGI_ERROR_MODE_CHANGE_IN_PROGRESS (0x887A0025)"));
}
