use std::fs::write;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn summary_subcommand_prints_json() {
    let td = tempdir().expect("tempdir");
    let csv = td.path().join("kev.csv");
    write(
        &csv,
        "cveID,vendorProject,product,dateAdded\n\
         CVE-2021-44228,Apache,Log4j2,2021-12-10\n\
         CVE-2021-45046,Apache,Log4j2,2021-12-14\n\
         CVE-2017-0144,Microsoft,SMBv1,2022-02-10\n",
    )
    .expect("write csv");

    let exe = env!("CARGO_BIN_EXE_kev-dashboard");
    let output = Command::new(exe)
        .args(["summary", "--data", csv.to_str().unwrap()])
        .output()
        .expect("run kev-dashboard summary");

    assert!(output.status.success(), "summary failed: {output:?}");

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["summary"]["total_cves"], 3);
    assert_eq!(report["summary"]["unique_vendors"], 2);
    assert_eq!(report["summary"]["by_year_added"][0][0], 2021);
    assert_eq!(report["summary"]["by_year_added"][0][1], 2);
    assert_eq!(report["yearly_trend"]["peak_year"], 2021);
}

#[test]
fn summary_fails_for_missing_dataset() {
    let td = tempdir().expect("tempdir");
    let missing = td.path().join("nope.csv");

    let exe = env!("CARGO_BIN_EXE_kev-dashboard");
    let output = Command::new(exe)
        .args(["summary", "--data", missing.to_str().unwrap()])
        .output()
        .expect("run kev-dashboard summary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Dataset unavailable"), "stderr: {stderr}");
}

#[test]
fn render_figures_writes_into_out_dir() {
    let td = tempdir().expect("tempdir");
    let csv = td.path().join("kev.csv");
    write(
        &csv,
        "cveID,vendorProject,product,dateAdded,knownRansomwareCampaignUse\n\
         CVE-2021-44228,Apache,Log4j2,2021-12-10,Known\n\
         CVE-2017-0144,Microsoft,SMBv1,2022-02-10,Unknown\n",
    )
    .expect("write csv");
    let out = td.path().join("rendered");

    let exe = env!("CARGO_BIN_EXE_kev-dashboard");
    let output = Command::new(exe)
        .args(["render-figures", "--data", csv.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .output()
        .expect("run kev-dashboard render-figures");

    assert!(output.status.success(), "render-figures failed: {output:?}");
    for file in [
        "cve_year_distribution.png",
        "monthly_distribution.png",
        "ransomware_flag.png",
        "top_vendors.png",
        "top_products.png",
        "trend_by_year.png",
    ] {
        assert!(out.join(file).is_file(), "{file} not written");
    }
}
