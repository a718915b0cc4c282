//! Build script to embed Windows resource metadata into executables
//! This sets the description shown in Explorer and Task Manager

fn main() {
    #[cfg(windows)]
    {
        let mut res = winresource::WindowsResource::new();

        res.set("ProductName", "PWA Icon Generator");
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("FileDescription", "PWA icon generator");
        res.set("InternalName", "generate_icons");
        res.set("OriginalFilename", "generate_icons.exe");

        if let Err(e) = res.compile() {
            eprintln!("Warning: Failed to compile Windows resources: {}", e);
        }
    }
}
