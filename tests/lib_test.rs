//! Library integration tests.

use std::env::VarError;
use std::path::PathBuf;

use vsfind::config::Config;
use vsfind::discovery::{find_instances_preferred_first, find_toolsets_preferred_first};
use vsfind::host::{Host, MockFilesystem, MockProcessRunner};
use vsfind::instance::ReleaseTier;
use vsfind::toolset::{CpuArchitecture, ToolsetVersion};
use vsfind::ui::MockUI;
use vsfind::VsFindError;

fn env(key: &str) -> Result<String, VarError> {
    match key {
        "ProgramFiles(x86)" => Ok("C:/PF86".to_string()),
        _ => Err(VarError::NotPresent),
    }
}

const VSWHERE: &str = "C:/PF86/Microsoft Visual Studio/Installer/vswhere.exe";

const QUERY_OUTPUT: &str = r#"<?xml version="1.0"?>
<instances>
  <instance>
    <installationPath>C:/VS/Preview</installationPath>
    <installationVersion>15.9.1</installationVersion>
    <isPrerelease>1</isPrerelease>
  </instance>
  <instance>
    <installationPath>C:/VS/Community</installationPath>
    <installationVersion>15.8.2</installationVersion>
    <isPrerelease>0</isPrerelease>
  </instance>
</instances>
"#;

fn modern(fs: MockFilesystem, root: &str) -> MockFilesystem {
    let bin = format!("{}/VC/Tools/MSVC/14.15.26726/bin/HostX86/x86", root);
    fs.with_file(format!("{}/VC/Auxiliary/Build/vcvarsall.bat", root))
        .with_file(format!("{}/VC/Auxiliary/Build/vcvars32.bat", root))
        .with_file(format!("{}/VC/Auxiliary/Build/vcvarsx86_arm64.bat", root))
        .with_file(format!("{}/dumpbin.exe", bin))
        .with_dir(format!("{}/1033", bin))
}

#[test]
fn legacy_instance_without_language_pack_stops_the_scan() {
    // Found through VS140COMNTOOLS, so it ranks ahead of the default root.
    let fs = MockFilesystem::new()
        .with_file("C:/VS14/VC/bin/cl.exe")
        .with_file("C:/VS14/VC/vcvarsall.bat")
        .with_file("C:/VS14/VC/bin/dumpbin.exe");
    let default_root = "C:/PF86/Microsoft Visual Studio 14.0";
    let fs = fs
        .with_file(format!("{}/VC/bin/cl.exe", default_root))
        .with_file(format!("{}/VC/vcvarsall.bat", default_root))
        .with_file(format!("{}/VC/bin/dumpbin.exe", default_root))
        .with_dir(format!("{}/VC/bin/1033", default_root));
    let runner = MockProcessRunner::unstartable();
    let with_tools_var = |key: &str| -> Result<String, VarError> {
        match key {
            "VS140COMNTOOLS" => Ok("C:/VS14/Common7/Tools".to_string()),
            other => env(other),
        }
    };
    let host = Host::new(&fs, &runner, &with_tools_var);
    let mut ui = MockUI::new();

    let err = find_toolsets_preferred_first(&host, &Config::default(), &mut ui).unwrap_err();

    assert!(ui.has_warning("C:/VS14"));
    let later_dumpbin = PathBuf::from(format!("{}/VC/bin/dumpbin.exe", default_root));
    assert!(!fs.was_probed(&later_dumpbin));
    match err {
        VsFindError::NoToolsetFound { examined } => assert_eq!(
            examined,
            vec![
                PathBuf::from("C:/VS14/VC/vcvarsall.bat"),
                PathBuf::from("C:/VS14/VC/bin/dumpbin.exe"),
            ]
        ),
        other => panic!("Expected NoToolsetFound, got {:?}", other),
    }
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use vsfind::cli::{Cli, Commands};

    let cli = Cli::parse_from(["vsfind", "instances", "--json"]);

    if let Some(Commands::Instances(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Instances command");
    }
}

#[test]
fn stable_instance_outranks_newer_prerelease() {
    let fs = MockFilesystem::new().with_file(VSWHERE);
    let runner = MockProcessRunner::succeeding(QUERY_OUTPUT);
    let host = Host::new(&fs, &runner, &env);

    let instances = find_instances_preferred_first(&host, &Config::default()).unwrap();

    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].tier(), ReleaseTier::Stable);
    assert_eq!(instances[1].tier(), ReleaseTier::Prerelease);
}

#[test]
fn resolves_modern_toolsets_with_architectures() {
    let fs = MockFilesystem::new().with_file(VSWHERE);
    let fs = modern(fs, "C:/VS/Preview");
    let fs = modern(fs, "C:/VS/Community");
    let runner = MockProcessRunner::succeeding(QUERY_OUTPUT);
    let host = Host::new(&fs, &runner, &env);
    let mut ui = MockUI::new();

    let toolsets = find_toolsets_preferred_first(&host, &Config::default(), &mut ui).unwrap();

    assert_eq!(toolsets.len(), 2);
    assert_eq!(toolsets[0].root_path, PathBuf::from("C:/VS/Community"));
    assert!(toolsets.iter().all(|t| t.version == ToolsetVersion::V141));
    let archs: Vec<&str> = toolsets[0]
        .supported_architectures
        .iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(archs, vec!["x86", "x86_arm64"]);
    assert_eq!(
        toolsets[0].supported_architectures[1].target,
        CpuArchitecture::Arm64
    );
}

#[test]
fn malformed_query_output_is_an_error() {
    let fs = MockFilesystem::new().with_file(VSWHERE);
    let runner = MockProcessRunner::succeeding(
        "<instance><installationVersion>15.0</installationVersion></instance>",
    );
    let host = Host::new(&fs, &runner, &env);

    let err = find_instances_preferred_first(&host, &Config::default()).unwrap_err();

    assert!(matches!(err, VsFindError::MalformedQueryOutput { .. }));
}
