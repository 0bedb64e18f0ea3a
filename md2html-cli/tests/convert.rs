use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::tempdir;

#[test]
fn converts_heading_and_paragraph() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "# Title\n\nHello **world**.\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<h1>Title</h1>\n<p>\nHello <b>world</b>.\n</p>");
}

#[test]
fn groups_adjacent_items_and_switches_list_kind() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("lists.md");
    let output = dir.path().join("lists.html");
    fs::write(&input, "- a\n- b\n\n* x\n* y\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        html,
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<ol>\n<li>x</li>\n<li>y</li>\n</ol>"
    );
}

#[test]
fn digest_span_renders_md5_hex() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("digest.md");
    let output = dir.path().join("digest.html");
    fs::write(&input, "[[abc]]").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<p>\n900150983cd24fb0d6963f7d28e17f72\n</p>");
}

#[test]
fn strip_span_removes_target_letters() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("strip.md");
    let output = dir.path().join("strip.html");
    fs::write(&input, "((cocoa))").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<p>\nooa\n</p>");
}

#[test]
fn bare_dash_makes_an_empty_item() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dash.md");
    let output = dir.path().join("dash.html");
    fs::write(&input, "-\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<ul>\n<li></li>\n</ul>");
}

#[test]
fn reconverting_yields_identical_bytes() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");
    fs::write(&input, "# T\n\n[[abc]] and ((cocoa))\n\n- item\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(first.as_os_str());
    cmd.assert().success();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(second.as_os_str());
    cmd.assert().success();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn output_file_is_overwritten() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "# New\n").unwrap();
    fs::write(&output, "stale content that should disappear").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<h1>New</h1>");
}

#[test]
fn explicit_convert_subcommand_behaves_like_the_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.html");
    fs::write(&input, "# Same\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg("convert").arg(input.as_os_str()).arg(output.as_os_str());
    cmd.assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<h1>Same</h1>");
}

#[test]
fn target_format_can_be_overridden() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    let output = dir.path().join("doc.tree");
    fs::write(&input, "# Title\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2html");
    cmd.arg(input.as_os_str())
        .arg(output.as_os_str())
        .arg("--to")
        .arg("treeviz");
    cmd.assert().success();

    let tree = fs::read_to_string(&output).unwrap();
    assert!(tree.starts_with("⧉ document\n"));
    assert!(tree.contains("§ h1 Title"));
}
