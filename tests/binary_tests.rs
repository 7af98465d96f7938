use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn test_binary_runs() {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.arg("--version").assert().success();
}

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.arg("--help").assert().success();
}

#[test]
fn test_binary_init() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.current_dir(dir.path()).arg("init").assert().success();
}

#[test]
fn test_binary_no_command_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.assert().failure().code(2);
}
