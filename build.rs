//! Build script that looks for the native libraries the gesture mouse links
//! against and prints install hints when they are missing.
//!
//! OpenCV is needed for capture and the preview window; X11 with the XTEST
//! extension is needed to move and click the pointer.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if !pkg_config_available() {
        println!("cargo:warning=pkg-config not found; native library checks skipped.");
        println!("cargo:warning=On Ubuntu: sudo apt-get install pkg-config");
        println!("cargo:warning=On macOS: brew install pkg-config");
        return;
    }

    check_opencv();

    // Cursor control only exists on Linux/X11
    if env::var("TARGET").unwrap_or_default().contains("linux") {
        check_x11();
    }
}

fn pkg_config_available() -> bool {
    Command::new("pkg-config")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Version string reported by pkg-config for `module`, if installed
fn module_version(module: &str) -> Option<String> {
    let output = Command::new("pkg-config").args(["--modversion", module]).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn check_opencv() {
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
    println!("cargo:rerun-if-env-changed=OPENCV_LINK_PATHS");
    println!("cargo:rerun-if-env-changed=OPENCV_INCLUDE_PATHS");

    match module_version("opencv4").or_else(|| module_version("opencv")) {
        Some(version) => println!("cargo:warning=Using OpenCV {version}"),
        None => {
            println!("cargo:warning=OpenCV not found; webcam capture and preview need it.");
            println!("cargo:warning=On Ubuntu: sudo apt-get install libopencv-dev clang libclang-dev");
            println!("cargo:warning=On macOS: brew install opencv");
        }
    }
}

fn check_x11() {
    for (module, package) in [("x11", "libx11-dev"), ("xtst", "libxtst-dev")] {
        if module_version(module).is_none() {
            println!("cargo:warning={module} not found; pointer control will be unavailable.");
            println!("cargo:warning=On Ubuntu: sudo apt-get install {package}");
        }
    }
}
