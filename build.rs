#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/uphtrack.ico must exist for Windows release builds
    let mut res = WindowsResource::new();
    res.set_icon("res/uphtrack.ico")
        .set("FileDescription", "uphtrack CLI")
        .set("ProductName", "uphtrack")
        .set("OriginalFilename", "uphtrack.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
