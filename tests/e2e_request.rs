
use std::fs;

use tempfile::tempdir;

use support_single::{closed_port_url, describe_output, run_netmeg, spawn_http_server};

#[test]
fn e2e_request_prints_one_block_per_request() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_netmeg(["request", "-u", url.as_str(), "-n", "3"])?;
    if !output.status.success() {
        return Err(describe_output(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let block = "new_request\nStatus_Code: 200\nBody: OK\n\n";
    if stdout != block.repeat(3) {
        return Err(describe_output(&output));
    }
    Ok(())
}

#[test]
fn e2e_request_file_mode_reports_bytes_written() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("out.log");
    let path_arg = path.to_string_lossy().into_owned();

    let output = run_netmeg([
        "request",
        "-u",
        url.as_str(),
        "-n",
        "2",
        "-o",
        path_arg.as_str(),
        "--mode",
        "file",
    ])?;
    if !output.status.success() {
        return Err(describe_output(&output));
    }

    let content = fs::read_to_string(&path).map_err(|err| format!("read failed: {}", err))?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim() != format!("wrote {} bytes", content.len()) {
        return Err(describe_output(&output));
    }
    if content.matches("Status_Code: 200").count() != 2 {
        return Err(format!("Unexpected file content: {:?}", content));
    }
    Ok(())
}

#[test]
fn e2e_request_unreachable_target_reports_sentinel_status() -> Result<(), String> {
    let url = closed_port_url()?;

    let output = run_netmeg(["request", "-u", url.as_str(), "-n", "2"])?;
    if !output.status.success() {
        return Err(describe_output(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.matches("Status_Code: -1\nBody: ").count() != 2 {
        return Err(describe_output(&output));
    }
    Ok(())
}

#[test]
fn e2e_request_malformed_headers_exit_non_zero() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;

    let output = run_netmeg(["request", "-u", url.as_str(), "-H", "broken"])?;
    if output.status.success() {
        return Err(describe_output(&output));
    }
    if !output.stdout.is_empty() {
        return Err(describe_output(&output));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("broken") {
        return Err(describe_output(&output));
    }
    Ok(())
}

#[test]
fn e2e_request_without_url_exit_non_zero() -> Result<(), String> {
    let output = run_netmeg(["request"])?;
    if output.status.success() {
        return Err(describe_output(&output));
    }
    Ok(())
}
