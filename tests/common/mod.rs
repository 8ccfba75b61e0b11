#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use flash_mcu::args::Args;
use flash_mcu::request::InvocationRequest;
use flash_mcu::settings::{Defaults, OpenOcdSettings};
use flash_mcu::toolchain::Toolchain;

/// Fresh, empty directory under `out/fixtures`.
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("out")
        .join("fixtures")
        .join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create fixture dir");
    dir
}

pub fn touch(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, b"").expect("write file");
    path.to_path_buf()
}

#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path.to_path_buf()
}

/// Marks a fixture file executable; a no-op where modes do not exist.
pub fn make_executable(path: &Path) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod file");
    }
    path.to_path_buf()
}

/// System openocd location that does not exist, forcing the package-cache lookup.
pub fn absent_system_openocd(root: &Path) -> OpenOcdSettings {
    OpenOcdSettings {
        bin: root.join("usr/local/bin/openocd"),
        root: root.join("usr/local/share/openocd"),
    }
}

/// PlatformIO home with openocd (PlatformIO layout) and the bundled esptool.
pub fn fake_platformio(root: &Path) -> PathBuf {
    let home = root.join("platformio");
    let openocd = home.join("packages/tool-openocd");
    touch(&openocd.join("bin/openocd"));
    touch(&openocd.join("openocd/scripts/interface/cmsis-dap.cfg"));
    touch(&openocd.join("openocd/scripts/target/stm32f1x.cfg"));
    touch(&home.join("packages/tool-esptoolpy/esptool.py"));
    touch(&home.join("penv/bin/python"));
    home
}

pub fn platformio_toolchain(root: &Path) -> Toolchain {
    Toolchain::new(
        absent_system_openocd(root),
        Some(fake_platformio(root)),
        None,
    )
}

/// Toolchain that cannot resolve anything.
pub fn empty_toolchain(root: &Path) -> Toolchain {
    Toolchain::new(absent_system_openocd(root), None, None)
}

pub fn request(argv: &[&str]) -> InvocationRequest {
    let mut full = vec!["flash-mcu"];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).expect("valid arguments");
    InvocationRequest::new(&args, &Defaults::default())
}

/// Settings file pointing the binary at a fixture tree.
pub fn write_settings(root: &Path, openocd: &OpenOcdSettings, platformio_home: &Path) -> PathBuf {
    let path = root.join("flash-mcu.toml");
    let content = format!(
        "[openocd]\nbin = '{}'\nroot = '{}'\n\n[platformio]\nhome = '{}'\n",
        openocd.bin.display(),
        openocd.root.display(),
        platformio_home.display()
    );
    fs::write(&path, content).expect("write settings");
    path
}

pub fn as_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 fixture path")
}
