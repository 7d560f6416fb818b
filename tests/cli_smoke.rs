use std::path::PathBuf;

use image::{Rgba, RgbaImage};

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_boxblur")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "boxblur.exe"
            } else {
                "boxblur"
            });
            p
        })
}

fn write_dot_png(path: &std::path::Path) {
    let mut img = RgbaImage::from_pixel(9, 9, Rgba([0, 0, 0, 255]));
    img.put_pixel(4, 4, Rgba([255, 255, 255, 255]));
    img.save(path).unwrap();
}

#[test]
fn cli_blurs_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("dot.png");
    let out_path = dir.join("out").join("dot_blur.png");
    let _ = std::fs::remove_file(&out_path);
    write_dot_png(&in_path);

    let status = std::process::Command::new(exe())
        .arg("--in")
        .arg(&in_path)
        .arg("--out")
        .arg(&out_path)
        .args(["--radius", "3", "--mode", "reuse-source"])
        .status()
        .unwrap();
    assert!(status.success());

    let out = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(out.dimensions(), (9, 9));
    assert_eq!(out.get_pixel(4, 4).0, [3, 3, 3, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn cli_reads_config_file() {
    let dir = PathBuf::from("target").join("cli_smoke_config");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("dot.png");
    let cfg_path = dir.join("opts.json");
    let out_path = dir.join("dot_blur.png");
    let _ = std::fs::remove_file(&out_path);
    write_dot_png(&in_path);
    std::fs::write(&cfg_path, r#"{"radius": 0}"#).unwrap();

    let status = std::process::Command::new(exe())
        .arg("--in")
        .arg(&in_path)
        .arg("--out")
        .arg(&out_path)
        .arg("--config")
        .arg(&cfg_path)
        .status()
        .unwrap();
    assert!(status.success());

    let out = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(out.get_pixel(4, 4).0, [255, 255, 255, 255]);
}

#[test]
fn cli_rejects_bad_config() {
    let dir = PathBuf::from("target").join("cli_smoke_bad");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("dot.png");
    let cfg_path = dir.join("opts.json");
    write_dot_png(&in_path);
    std::fs::write(&cfg_path, r#"{"sigma": 2}"#).unwrap();

    let status = std::process::Command::new(exe())
        .arg("--in")
        .arg(&in_path)
        .arg("--out")
        .arg(dir.join("never.png"))
        .arg("--config")
        .arg(&cfg_path)
        .status()
        .unwrap();
    assert!(!status.success());
}
