pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("scmpuff {VERSION}")
}

pub fn execute_version() {
    println!("{}", version_line());
}
